use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Generics, Ident, ImplGenerics, LitStr, TypeGenerics};

use super::TypeAttributes;

/// Everything about the derived type except its fields.
pub(crate) struct RecordMeta<'a> {
    gs_reflect_path: syn::Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl<'a> RecordMeta<'a> {
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        for param in &generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(lt) => {
                    return Err(syn::Error::new_spanned(
                        lt,
                        "`Record` types must be `'static`, lifetime parameters are not supported",
                    ));
                }
                GenericParam::Const(c) => {
                    return Err(syn::Error::new_spanned(
                        c,
                        "const parameters are not supported by `Record`",
                    ));
                }
            }
        }

        Ok(Self {
            gs_reflect_path: crate::path::gs_reflect(),
            attrs,
            ident,
            generics,
        })
    }

    #[inline]
    pub fn gs_reflect_path(&self) -> &syn::Path {
        &self.gs_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// The short name, without generics.
    pub fn type_ident(&self) -> LitStr {
        match &self.attrs.type_path {
            Some(lit) => {
                let value = lit.value();
                let ident = value.rsplit("::").next().unwrap_or(&value).to_owned();
                LitStr::new(&ident, lit.span())
            }
            None => LitStr::new(&self.ident.to_string(), self.ident.span()),
        }
    }

    /// A constant expression of the path without generics.
    pub fn base_type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => quote!(#lit),
            None => {
                let module_path_ = crate::path::module_path_(&self.gs_reflect_path);
                let ident = self.type_ident();
                quote!(::core::concat!(#module_path_!(), "::", #ident))
            }
        }
    }

    /// Returns `impl_generics`, `ty_generics` and a where clause in which
    /// every type parameter is bounded by `bound`.
    pub fn split_generics(
        &self,
        bound: &TokenStream,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut predicates = Vec::new();
        if let Some(where_clause) = where_clause {
            predicates.extend(where_clause.predicates.iter().map(|p| quote!(#p)));
        }
        for param in self.generics.type_params() {
            let ident = &param.ident;
            predicates.push(quote!(#ident: #bound));
        }

        let where_clause = if predicates.is_empty() {
            crate::impls::empty()
        } else {
            quote!(where #(#predicates,)*)
        };

        (impl_generics, ty_generics, where_clause)
    }

    /// The type parameter identifiers, in declaration order.
    pub fn type_params(&self) -> impl Iterator<Item = &Ident> {
        self.generics.type_params().map(|param| &param.ident)
    }
}
