//! Derive macros for uied.
//!
//! `#[derive(WithBuilders)]` adds a consuming `with_<field>` setter for every
//! named field of a struct. Setters accept anything convertible into the
//! field type, so `config.with_title("UIED")` works on a `String` field.
//!
//! Field attributes:
//! - `#[with_builders(skip)]`: no setter for this field.
//! - `#[with_builders(exact)]`: the setter takes the field type itself
//!   instead of `impl Into<T>`. Needed when inference would be ambiguous,
//!   for example with closures or trait objects.
//!
//! ```ignore
//! use uied_macros::WithBuilders;
//!
//! #[derive(Default, WithBuilders)]
//! pub struct AppConfig {
//!     pub title: String,
//!     pub width: u32,
//!     #[with_builders(skip)]
//!     pub frames_drawn: u64,
//! }
//!
//! let config = AppConfig::default().with_title("UIED").with_width(640u32);
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Field, Fields};

#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "WithBuilders can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new(
            data.fields.span(),
            "WithBuilders needs named fields",
        ));
    };

    let mut setters = Vec::new();
    for field in &fields.named {
        let options = FieldOptions::parse(field)?;
        if options.skip {
            continue;
        }
        let Some(name) = &field.ident else {
            continue;
        };
        let ty = &field.ty;
        let setter = format_ident!("with_{}", name);
        let doc = format!("Set `{}`", name);

        setters.push(if options.exact {
            quote! {
                #[doc = #doc]
                #[inline]
                #[must_use]
                pub fn #setter(mut self, value: #ty) -> Self {
                    self.#name = value;
                    self
                }
            }
        } else {
            quote! {
                #[doc = #doc]
                #[inline]
                #[must_use]
                pub fn #setter(mut self, value: impl ::core::convert::Into<#ty>) -> Self {
                    self.#name = value.into();
                    self
                }
            }
        });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#setters)*
        }
    })
}

#[derive(Default)]
struct FieldOptions {
    skip: bool,
    exact: bool,
}

impl FieldOptions {
    fn parse(field: &Field) -> syn::Result<Self> {
        let mut options = Self::default();
        for attr in field
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("with_builders"))
        {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    options.skip = true;
                    Ok(())
                } else if meta.path.is_ident("exact") {
                    options.exact = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `exact`"))
                }
            })?;
        }
        Ok(options)
    }
}
