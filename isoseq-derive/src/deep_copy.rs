//! Implementation of the `#[derive(DeepCopy)]` macro.
//!
//! The generated implementation destructures `self` and copies every field
//! with `DeepCopy::deep_copy`, propagating the first failure. Fields marked
//! `#[deep_copy(clone)]` are duplicated with `Clone` instead.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, parse_quote, Data, DataEnum, DeriveInput, Field, Fields, GenericParam,
    Generics, Ident,
};

/// Main implementation of the `DeepCopy` derive macro.
pub fn derive_deep_copy_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

/// Expands a parsed item into its `DeepCopy` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let body = match &input.data {
        Data::Struct(data_struct) => {
            let (pattern, construction) = copy_fields(&quote!(Self), &data_struct.fields)?;
            quote! {
                let #pattern = self;
                ::core::result::Result::Ok(#construction)
            }
        }
        Data::Enum(data_enum) => copy_variants(data_enum)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "DeepCopy cannot be derived for unions.",
            ));
        }
    };

    let generics = add_trait_bounds(input.generics.clone());
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::isoseq::copy::DeepCopy for #name #type_generics #where_clause {
            fn deep_copy(&self) -> ::core::result::Result<Self, ::isoseq::error::CopyError> {
                #body
            }
        }
    })
}

/// Requires every type parameter to implement `DeepCopy`.
fn add_trait_bounds(mut generics: Generics) -> Generics {
    for parameter in &mut generics.params {
        if let GenericParam::Type(type_parameter) = parameter {
            type_parameter
                .bounds
                .push(parse_quote!(::isoseq::copy::DeepCopy));
        }
    }
    generics
}

fn copy_variants(data_enum: &DataEnum) -> syn::Result<TokenStream2> {
    let arms = data_enum
        .variants
        .iter()
        .map(|variant| {
            let variant_name = &variant.ident;
            let (pattern, construction) =
                copy_fields(&quote!(Self::#variant_name), &variant.fields)?;
            Ok(quote! { #pattern => #construction, })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    // Empty enums have no values to copy; `match *self {}` proves it.
    if arms.is_empty() {
        return Ok(quote! { match *self {} });
    }

    Ok(quote! {
        ::core::result::Result::Ok(match self {
            #(#arms)*
        })
    })
}

/// Returns the destructuring pattern and the copying constructor for a set
/// of fields under `path`.
fn copy_fields(path: &TokenStream2, fields: &Fields) -> syn::Result<(TokenStream2, TokenStream2)> {
    match fields {
        Fields::Named(named_fields) => {
            let bindings: Vec<&Ident> = named_fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let copies = named_fields
                .named
                .iter()
                .zip(&bindings)
                .map(|(field, binding)| copy_expression(field, binding))
                .collect::<syn::Result<Vec<_>>>()?;

            Ok((
                quote! { #path { #(#bindings),* } },
                quote! { #path { #(#bindings: #copies),* } },
            ))
        }
        Fields::Unnamed(unnamed_fields) => {
            let bindings: Vec<Ident> = (0..unnamed_fields.unnamed.len())
                .map(|index| format_ident!("field_{}", index))
                .collect();
            let copies = unnamed_fields
                .unnamed
                .iter()
                .zip(&bindings)
                .map(|(field, binding)| copy_expression(field, binding))
                .collect::<syn::Result<Vec<_>>>()?;

            Ok((
                quote! { #path ( #(#bindings),* ) },
                quote! { #path ( #(#copies),* ) },
            ))
        }
        Fields::Unit => Ok((path.clone(), path.clone())),
    }
}

fn copy_expression(field: &Field, binding: &Ident) -> syn::Result<TokenStream2> {
    if copies_with_clone(field)? {
        Ok(quote! { ::core::clone::Clone::clone(#binding) })
    } else {
        Ok(quote! { ::isoseq::copy::DeepCopy::deep_copy(#binding)? })
    }
}

/// Reads `#[deep_copy(clone)]` from a field.
fn copies_with_clone(field: &Field) -> syn::Result<bool> {
    let mut clone = false;
    for attribute in &field.attrs {
        if !attribute.path().is_ident("deep_copy") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("clone") {
                clone = true;
                Ok(())
            } else {
                Err(meta.error("unsupported deep_copy attribute, expected `clone`"))
            }
        })?;
    }
    Ok(clone)
}
