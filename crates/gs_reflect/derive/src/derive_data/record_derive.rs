use syn::{Data, DeriveInput, Fields, Ident, Type};

use super::{FieldTag, RecordMeta, TypeAttributes};

/// One named field of a derived struct.
pub(crate) struct RecordField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub tag: Option<FieldTag>,
}

pub(crate) enum RecordKind<'a> {
    /// Named fields, in declaration order.
    Struct(Vec<RecordField<'a>>),
    /// Fields are not described.
    Opaque,
}

/// A parsed `#[derive(Record)]` input.
pub(crate) struct RecordDerive<'a> {
    pub meta: RecordMeta<'a>,
    pub kind: RecordKind<'a>,
}

impl<'a> RecordDerive<'a> {
    pub fn from_derive_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        FieldTag::forbid(&input.attrs, "`#[graphql(...)]` tags belong on fields")?;

        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Record` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Record` cannot be derived for unions",
                ));
            }
        };

        let is_opaque = attrs.opaque.is_some();
        let meta = RecordMeta::new(attrs, &input.ident, &input.generics)?;

        let kind = match &data.fields {
            Fields::Named(fields) if !is_opaque => {
                let fields = fields
                    .named
                    .iter()
                    .map(|field| {
                        Ok(RecordField {
                            // Named fields always carry an ident.
                            ident: field.ident.as_ref().ok_or_else(|| {
                                syn::Error::new_spanned(field, "expected a named field")
                            })?,
                            ty: &field.ty,
                            tag: FieldTag::parse_attrs(&field.attrs)?,
                        })
                    })
                    .collect::<syn::Result<Vec<_>>>()?;
                RecordKind::Struct(fields)
            }
            fields => {
                for field in fields.iter() {
                    FieldTag::forbid(
                        &field.attrs,
                        "`#[graphql(...)]` tags need a struct with named fields that is not `opaque`",
                    )?;
                }
                RecordKind::Opaque
            }
        };

        Ok(Self { meta, kind })
    }
}
