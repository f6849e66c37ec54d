use proc_macro2::TokenStream;
use quote::quote;

use crate::object_meta::ObjectMeta;

/// Generate implementation codes for `Typed`
///
/// The info is built on first access and cached in a static cell:
///
/// ```ignore
/// _path_::ObjectInfo::new::<Self>(&[
///     _path_::FieldInfo::new::<FieldTy>("field"),
///     ...
/// ])
/// (.with_parent::<Ancestor>())*
/// ```
pub(crate) fn impl_trait_typed(meta: &ObjectMeta) -> TokenStream {
    let om_object_path = meta.om_object_path();
    let typed_ = crate::path::typed_(om_object_path);
    let object_info_ = crate::path::object_info_(om_object_path);
    let object_info_cell_ = crate::path::object_info_cell_(om_object_path);
    let field_info_ = crate::path::field_info_(om_object_path);

    let ident = meta.ident();

    let fields = meta.fields().iter().map(|field| {
        let ty = field.ty;
        let name = field.name();
        quote! {
            #field_info_::new::<#ty>(#name)
        }
    });

    let parents = meta.attrs().extends.iter().map(|parent| {
        quote! {
            .with_parent::<#parent>()
        }
    });

    quote! {
        impl #typed_ for #ident {
            fn object_info() -> &'static #object_info_ {
                static CELL: #object_info_cell_ = #object_info_cell_::new();
                CELL.get_or_init(|| {
                    #object_info_::new::<Self>(&[
                        #(#fields,)*
                    ])
                    #(#parents)*
                })
            }
        }
    }
}
