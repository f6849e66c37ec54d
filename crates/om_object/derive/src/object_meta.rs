use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use crate::attributes::{FieldAttributes, TypeAttributes};

/// An exposed field of the derived struct.
pub(crate) struct FieldMeta<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
}

impl FieldMeta<'_> {
    /// The field name as a string literal.
    pub fn name(&self) -> String {
        self.ident.to_string()
    }
}

/// Everything the generated impls need from the derive input.
pub(crate) struct ObjectMeta<'a> {
    ident: &'a Ident,
    attrs: TypeAttributes,
    fields: Vec<FieldMeta<'a>>,
    om_object_path: syn::Path,
}

impl<'a> ObjectMeta<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`Object` cannot be derived for generic types",
            ));
        }

        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "`Object` requires a struct with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Object` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Object` cannot be derived for unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            if FieldAttributes::parse_attrs(&field.attrs)?.skip {
                continue;
            }
            // Named fields always carry an ident.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            fields.push(FieldMeta {
                ident,
                ty: &field.ty,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            attrs,
            fields,
            om_object_path: crate::path::om_object(),
        })
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn fields(&self) -> &[FieldMeta<'a>] {
        &self.fields
    }

    #[inline]
    pub fn om_object_path(&self) -> &syn::Path {
        &self.om_object_path
    }

    /// Expression of the full type path, a `&'static str`.
    pub fn type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => quote! { #lit },
            None => {
                let name = self.ident.to_string();
                quote! { ::core::concat!(::core::module_path!(), "::", #name) }
            }
        }
    }

    /// Expression of the short type name, a `&'static str`.
    pub fn type_name(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => {
                let value = lit.value();
                let name = value.rsplit("::").next().unwrap_or(&value).trim();
                quote! { #name }
            }
            None => {
                let name = self.ident.to_string();
                quote! { #name }
            }
        }
    }
}
