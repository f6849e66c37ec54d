use proc_macro2::TokenStream;
use quote::quote;

use crate::object_meta::ObjectMeta;

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(meta: &ObjectMeta) -> TokenStream {
    let trait_type_path_ = crate::path::type_path_(meta.om_object_path());

    let ident = meta.ident();
    let type_path = meta.type_path();
    let type_name = meta.type_name();

    quote! {
        impl #trait_type_path_ for #ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}
