use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DataStruct, DeriveInput, Fields, parse2};

/// Derive macro for field lenses.
///
/// For each named field `f: T` of `Record`, generates
///
/// ```ignore
/// pub fn f_lens() -> formlet::Lens<Record, T>
/// ```
///
/// whose setter rebuilds the record with struct update syntax, moving every
/// other field across untouched. The constructor takes the field's visibility.
pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(i) => i,
        Err(e) => return e.to_compile_error(),
    };

    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "#[derive(Lenses)] does not support generic structs",
        )
        .to_compile_error();
    }

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => &named.named,
        _ => {
            return syn::Error::new_spanned(
                &input,
                "#[derive(Lenses)] requires a struct with named fields",
            )
            .to_compile_error();
        }
    };

    let single_field = fields.len() == 1;

    let constructors = fields.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let ty = &field.ty;
        let vis = &field.vis;
        let method = format_ident!("{}_lens", ident.unraw());

        // Struct update syntax with nothing left to move trips clippy
        let rest = if single_field {
            quote! {}
        } else {
            quote! { ..record }
        };

        Some(quote! {
            #vis fn #method() -> ::formlet::Lens<#name, #ty> {
                fn get(record: &#name) -> &#ty {
                    &record.#ident
                }
                fn set(record: #name, value: #ty) -> #name {
                    #name { #ident: value, #rest }
                }
                ::formlet::Lens::new(get, set)
            }
        })
    });

    quote! {
        impl #name {
            #(#constructors)*
        }
    }
}
