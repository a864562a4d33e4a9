use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr, Path, Token, parenthesized, punctuated::Punctuated};

use crate::RECORD_ATTRIBUTE_NAME;

/// Attributes of `#[record(...)]`.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `TypeProvider`
    pub type_provider: Option<Span>,
    /// `ResolverProvider`
    pub resolver_provider: Option<Span>,
    /// `type_trait = Path` or `type_trait = (A, B)`
    pub extra_type_traits: Vec<Path>,
    /// `type_path = "..."`
    pub type_path: Option<LitStr>,
    /// `opaque`
    pub opaque: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }

        this.validity()?;
        Ok(this)
    }

    fn parse_meta(&mut self, meta: syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
        let span = meta.path.span();

        if meta.path.is_ident("TypeProvider") {
            Self::set_flag(&mut self.type_provider, span, "TypeProvider")
        } else if meta.path.is_ident("ResolverProvider") {
            Self::set_flag(&mut self.resolver_provider, span, "ResolverProvider")
        } else if meta.path.is_ident("opaque") {
            Self::set_flag(&mut self.opaque, span, "opaque")
        } else if meta.path.is_ident("type_path") {
            if self.type_path.is_some() {
                return Err(meta.error("duplicate `type_path`"));
            }
            self.type_path = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("type_trait") {
            let input = meta.value()?;
            if input.peek(syn::token::Paren) {
                let content;
                parenthesized!(content in input);
                let paths = Punctuated::<Path, Token![,]>::parse_terminated(&content)?;
                self.extra_type_traits.extend(paths);
            } else {
                self.extra_type_traits.push(input.parse()?);
            }
            Ok(())
        } else {
            Err(meta.error(
                "unknown record attribute, expected one of: \
                 `TypeProvider`, `ResolverProvider`, `type_trait`, `type_path`, `opaque`",
            ))
        }
    }

    fn set_flag(slot: &mut Option<Span>, span: Span, name: &str) -> syn::Result<()> {
        if slot.is_some() {
            return Err(syn::Error::new(span, format!("duplicate `{name}`")));
        }
        *slot = Some(span);
        Ok(())
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some(lit) = &self.type_path {
            let value = lit.value();
            if value.is_empty() || value.starts_with("::") || value.ends_with("::") {
                return Err(syn::Error::new(
                    lit.span(),
                    "`type_path` must be a path like `my_crate::model::User`, without leading `::`",
                ));
            }
            if value.contains('<') {
                return Err(syn::Error::new(
                    lit.span(),
                    "`type_path` must not contain generics, they are appended automatically",
                ));
            }
        }
        Ok(())
    }

    /// Number of type traits `get_type_meta` inserts.
    pub fn type_trait_len(&self) -> usize {
        usize::from(self.type_provider.is_some())
            + usize::from(self.resolver_provider.is_some())
            + self.extra_type_traits.len()
    }
}
