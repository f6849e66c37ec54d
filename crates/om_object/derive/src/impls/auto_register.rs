use proc_macro2::TokenStream;
#[cfg(feature = "auto_register")]
use quote::quote_spanned;

use crate::object_meta::ObjectMeta;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ObjectMeta) -> TokenStream {
    let Some(span) = meta.attrs().auto_register else {
        return TokenStream::new();
    };

    let auto_register_ = crate::path::auto_register_(meta.om_object_path());
    let ident = meta.ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ObjectMeta) -> TokenStream {
    TokenStream::new()
}
