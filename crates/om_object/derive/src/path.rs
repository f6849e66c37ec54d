//! Paths of the `om_object` items that generated code names.
//!
//! Kept in one place so a reorganization of `om_object` only touches this file.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `om_object` crate as seen by the caller.
///
/// Resolution scans the caller's Cargo.toml, see
/// [`Manifest`](om_macro_utils::Manifest). It is not cheap, so it runs once
/// per derive and the result is passed around.
pub(crate) fn om_object() -> syn::Path {
    om_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("om_object"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn type_path_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::info::TypePath }
}

#[inline(always)]
pub(crate) fn typed_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::info::Typed }
}

#[inline(always)]
pub(crate) fn object_info_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::info::ObjectInfo }
}

#[inline(always)]
pub(crate) fn object_info_cell_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::info::ObjectInfoCell }
}

#[inline(always)]
pub(crate) fn field_info_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::info::FieldInfo }
}

#[inline(always)]
pub(crate) fn object_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::Object }
}

#[inline(always)]
pub(crate) fn field_error_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::FieldError }
}

#[inline(always)]
pub(crate) fn value_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::value::Value }
}

#[inline(always)]
pub(crate) fn from_value_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::value::FromValue }
}

#[inline(always)]
pub(crate) fn to_value_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::value::ToValue }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(om_object_path: &syn::Path) -> TokenStream {
    quote! { #om_object_path::__macro_exports::auto_register }
}
