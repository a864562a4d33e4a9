//! Paths of the items generated code refers to.
//!
//! Crate roots are resolved from the caller's `Cargo.toml`, see
//! [`gs_macro_utils::Manifest`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

pub(crate) fn gs_reflect() -> syn::Path {
    gs_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("gs_reflect"))
}

pub(crate) fn gs_encoder() -> syn::Path {
    gs_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("gs_encoder"))
}

// -----------------------------------------------------------------------------
// gs_reflect

#[inline]
pub(crate) fn type_path_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::info::TypePath)
}

#[inline]
pub(crate) fn typed_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::info::Typed)
}

#[inline]
pub(crate) fn type_info_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::info::TypeInfo)
}

#[inline]
pub(crate) fn struct_info_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::info::StructInfo)
}

#[inline]
pub(crate) fn opaque_info_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::info::OpaqueInfo)
}

#[inline]
pub(crate) fn named_field_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::info::NamedField)
}

#[inline]
pub(crate) fn non_generic_type_info_cell_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::impls::NonGenericTypeInfoCell)
}

#[inline]
pub(crate) fn generic_type_info_cell_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::impls::GenericTypeInfoCell)
}

#[inline]
pub(crate) fn generic_type_path_cell_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::impls::GenericTypePathCell)
}

#[inline]
pub(crate) fn concat_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::__macro_exports::concat)
}

#[inline]
pub(crate) fn module_path_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::__macro_exports::module_path)
}

#[inline]
pub(crate) fn type_meta_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::registry::TypeMeta)
}

#[inline]
pub(crate) fn get_type_meta_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::registry::GetTypeMeta)
}

#[inline]
pub(crate) fn from_type_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::registry::FromType)
}

#[inline]
pub(crate) fn type_registry_(gs_reflect: &syn::Path) -> TokenStream {
    quote!(#gs_reflect::registry::TypeRegistry)
}

// -----------------------------------------------------------------------------
// gs_encoder

#[inline]
pub(crate) fn type_trait_type_provider_(gs_encoder: &syn::Path) -> TokenStream {
    quote!(#gs_encoder::hooks::TypeTraitTypeProvider)
}

#[inline]
pub(crate) fn type_trait_resolver_(gs_encoder: &syn::Path) -> TokenStream {
    quote!(#gs_encoder::hooks::TypeTraitResolver)
}
