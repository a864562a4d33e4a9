use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

use crate::derive_data::{RecordDerive, RecordKind};

/// Generate implementation codes for `Typed`.
///
/// Tagged fields become `NamedField::tagged::<Ty>`, which requires the field
/// type to implement `GetTypeMeta`. Untagged fields become
/// `NamedField::hidden` and put no bound on their type.
pub(crate) fn impl_trait_typed(derive: &RecordDerive) -> TokenStream {
    let meta = &derive.meta;
    let gs_reflect_path = meta.gs_reflect_path();
    let typed_ = crate::path::typed_(gs_reflect_path);
    let type_info_ = crate::path::type_info_(gs_reflect_path);
    let get_type_meta_ = crate::path::get_type_meta_(gs_reflect_path);

    let info = match &derive.kind {
        RecordKind::Struct(fields) => {
            let struct_info_ = crate::path::struct_info_(gs_reflect_path);
            let named_field_ = crate::path::named_field_(gs_reflect_path);

            let fields = fields.iter().map(|field| {
                let name = field.ident.to_string();
                match &field.tag {
                    Some(tag) => {
                        let ty = field.ty;
                        let lit = &tag.lit;
                        quote_spanned! { ty.span() =>
                            #named_field_::tagged::<#ty>(#name, #lit)
                        }
                    }
                    None => quote!(#named_field_::hidden(#name)),
                }
            });

            quote! {
                #type_info_::Struct(#struct_info_::new::<Self>(&[
                    #(#fields,)*
                ]))
            }
        }
        RecordKind::Opaque => {
            let opaque_info_ = crate::path::opaque_info_(gs_reflect_path);
            quote!(#type_info_::Opaque(#opaque_info_::new::<Self>()))
        }
    };

    let cell = if meta.is_generic() {
        let cell_ = crate::path::generic_type_info_cell_(gs_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(|| #info)
        }
    } else {
        let cell_ = crate::path::non_generic_type_info_cell_(gs_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(|| #info)
        }
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&get_type_meta_);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #cell
            }
        }
    }
}
