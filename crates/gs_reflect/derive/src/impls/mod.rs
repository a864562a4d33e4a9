// -----------------------------------------------------------------------------
// Modules

mod trait_get_type_meta;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDerive;

#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Generates `TypePath`, `Typed` and `GetTypeMeta` for a record.
pub(crate) fn impl_record(derive: &RecordDerive) -> TokenStream {
    let type_path = trait_type_path::impl_trait_type_path(&derive.meta);
    let typed = trait_typed::impl_trait_typed(derive);
    let get_type_meta = trait_get_type_meta::impl_trait_get_type_meta(derive);

    quote! {
        #type_path
        #typed
        #get_type_meta
    }
}
