use syn::{Attribute, LitStr};

use crate::FIELD_TAG_ATTRIBUTE_NAME;

/// The `#[graphql("...")]` tag of one field.
pub(crate) struct FieldTag {
    pub lit: LitStr,
}

impl FieldTag {
    /// Returns the tag found in `attrs`, or `None` for untagged fields.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Option<Self>> {
        let mut found: Option<Self> = None;

        for attr in attrs {
            if !attr.path().is_ident(FIELD_TAG_ATTRIBUTE_NAME) {
                continue;
            }
            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "a field accepts a single `#[graphql(...)]` tag",
                ));
            }
            let lit = attr.parse_args::<LitStr>().map_err(|err| {
                syn::Error::new(err.span(), "expected a string tag: `#[graphql(\"name\")]`")
            })?;
            found = Some(Self { lit });
        }

        Ok(found)
    }

    /// Rejects `#[graphql]` where it has no meaning.
    pub fn forbid(attrs: &[Attribute], message: &str) -> syn::Result<()> {
        match attrs
            .iter()
            .find(|attr| attr.path().is_ident(FIELD_TAG_ATTRIBUTE_NAME))
        {
            Some(attr) => Err(syn::Error::new_spanned(attr, message)),
            None => Ok(()),
        }
    }
}
