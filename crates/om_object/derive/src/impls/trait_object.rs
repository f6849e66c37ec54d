use proc_macro2::TokenStream;
use quote::quote;

use crate::object_meta::ObjectMeta;

/// Generate implementation codes for `Object`
///
/// Both accessors match on the field name. Reads go through `ToValue`,
/// writes through `FromValue`, so a value of the wrong kind is refused
/// instead of coerced.
pub(crate) fn impl_trait_object(meta: &ObjectMeta) -> TokenStream {
    let om_object_path = meta.om_object_path();
    let object_ = crate::path::object_(om_object_path);
    let value_ = crate::path::value_(om_object_path);
    let field_error_ = crate::path::field_error_(om_object_path);
    let from_value_ = crate::path::from_value_(om_object_path);
    let to_value_ = crate::path::to_value_(om_object_path);

    let ident = meta.ident();

    let getters = meta.fields().iter().map(|field| {
        let member = field.ident;
        let name = field.name();
        quote! {
            #name => ::core::option::Option::Some(#to_value_::to_value(&self.#member)),
        }
    });

    let setters = meta.fields().iter().map(|field| {
        let member = field.ident;
        let ty = field.ty;
        let name = field.name();
        quote! {
            #name => {
                self.#member = <#ty as #from_value_>::from_value(value)?;
                ::core::result::Result::Ok(())
            }
        }
    });

    quote! {
        impl #object_ for #ident {
            fn field_value(&self, name: &str) -> ::core::option::Option<#value_> {
                match name {
                    #(#getters)*
                    _ => ::core::option::Option::None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: #value_,
            ) -> ::core::result::Result<(), #field_error_> {
                match name {
                    #(#setters)*
                    _ => {
                        let _ = value;
                        ::core::result::Result::Err(#field_error_::Missing(name.into()))
                    }
                }
            }
        }
    }
}
