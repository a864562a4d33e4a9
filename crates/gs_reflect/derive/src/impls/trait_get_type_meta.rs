use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{Ident, spanned::Spanned};

use crate::derive_data::{RecordDerive, RecordKind};

/// Generate implementation codes for `GetTypeMeta`.
///
/// Capabilities listed in `#[record(...)]` are inserted through `FromType<Self>`,
/// and the types of tagged fields are registered as dependencies.
pub(crate) fn impl_trait_get_type_meta(derive: &RecordDerive) -> TokenStream {
    let meta = &derive.meta;
    let attrs = meta.attrs();
    let gs_reflect_path = meta.gs_reflect_path();
    let get_type_meta_ = crate::path::get_type_meta_(gs_reflect_path);
    let type_meta_ = crate::path::type_meta_(gs_reflect_path);
    let from_type_ = crate::path::from_type_(gs_reflect_path);
    let type_registry_ = crate::path::type_registry_(gs_reflect_path);

    let outer_ = Ident::new("__outer", Span::call_site());
    let trait_counter = attrs.type_trait_len();

    let insert = |type_trait: TokenStream, span: Span| {
        quote_spanned! { span =>
            #type_meta_::insert_trait::<#type_trait>(
                &mut #outer_,
                <#type_trait as #from_type_<Self>>::from_type(),
            );
        }
    };

    let mut inserts = Vec::with_capacity(trait_counter);

    if attrs.type_provider.is_some() || attrs.resolver_provider.is_some() {
        let gs_encoder_path = crate::path::gs_encoder();
        if let Some(span) = attrs.type_provider {
            inserts.push(insert(crate::path::type_trait_type_provider_(&gs_encoder_path), span));
        }
        if let Some(span) = attrs.resolver_provider {
            inserts.push(insert(crate::path::type_trait_resolver_(&gs_encoder_path), span));
        }
    }

    for extra in &attrs.extra_type_traits {
        inserts.push(insert(quote!(#extra), extra.span()));
    }

    let register_deps = match &derive.kind {
        RecordKind::Struct(fields) => {
            let registry_ = Ident::new("__registry", Span::call_site());
            let deps = fields
                .iter()
                .filter(|field| field.tag.is_some())
                .map(|field| {
                    let ty = field.ty;
                    quote!(#registry_.register::<#ty>();)
                })
                .collect::<Vec<_>>();

            if deps.is_empty() {
                crate::impls::empty()
            } else {
                quote! {
                    fn register_dependencies(#registry_: &mut #type_registry_) {
                        #(#deps)*
                    }
                }
            }
        }
        RecordKind::Opaque => crate::impls::empty(),
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&get_type_meta_);

    quote! {
        impl #impl_generics #get_type_meta_ for #ident #ty_generics #where_clause {
            fn get_type_meta() -> #type_meta_ {
                #[allow(unused_mut)]
                let mut #outer_ = #type_meta_::with_capacity::<Self>(#trait_counter);
                #(#inserts)*
                #outer_
            }

            #register_deps
        }
    }
}
