use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordMeta;

fn static_path_cell(gs_reflect_path: &syn::Path, generator: TokenStream) -> TokenStream {
    let path_cell_ = crate::path::generic_type_path_cell_(gs_reflect_path);

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #generator
        })
    }
}

/// Generate implementation codes for `TypePath`.
pub(crate) fn impl_trait_type_path(meta: &RecordMeta) -> TokenStream {
    let gs_reflect_path = meta.gs_reflect_path();
    let type_path_ = crate::path::type_path_(gs_reflect_path);
    let concat_ = crate::path::concat_(gs_reflect_path);

    let ident = meta.ident();
    let type_ident = meta.type_ident();
    let base_path = meta.base_type_path();

    let (type_path, type_name, inline_flag) = if meta.is_generic() {
        let params = meta.type_params().collect::<Vec<_>>();
        let path_params = quote! {
            [#(<#params as #type_path_>::type_path()),*].join(", ")
        };
        let name_params = quote! {
            [#(<#params as #type_path_>::type_name()),*].join(", ")
        };

        (
            static_path_cell(
                gs_reflect_path,
                quote!(#concat_(&[#base_path, "<", &#path_params, ">"])),
            ),
            static_path_cell(
                gs_reflect_path,
                quote!(#concat_(&[#type_ident, "<", &#name_params, ">"])),
            ),
            crate::impls::empty(),
        )
    } else {
        (base_path, quote!(#type_ident), quote!(#[inline]))
    };

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&type_path_);

    quote! {
        impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}
