//! Code generation, one file per trait.

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_object;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::object_meta::ObjectMeta;

pub(crate) use auto_register::get_auto_register_impl;
pub(crate) use trait_object::impl_trait_object;
pub(crate) use trait_type_path::impl_trait_type_path;
pub(crate) use trait_typed::impl_trait_typed;

/// Generate every impl of `#[derive(Object)]`.
pub(crate) fn impl_object(meta: &ObjectMeta) -> TokenStream {
    let type_path_impl = impl_trait_type_path(meta);
    let typed_impl = impl_trait_typed(meta);
    let object_impl = impl_trait_object(meta);
    let auto_register_impl = get_auto_register_impl(meta);

    quote! {
        const _: () = {
            #type_path_impl

            #typed_impl

            #object_impl

            #auto_register_impl
        };
    }
}
