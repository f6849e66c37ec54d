//! Parsing of `#[object(...)]` attributes.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr, Path, Token};

use crate::OBJECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes applied to the type.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[object(type_path = "...")]`
    pub type_path: Option<LitStr>,
    /// `#[object(extends(A, B))]`, in declaration order.
    pub extends: Vec<Path>,
    /// `#[object(auto_register)]`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(OBJECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path`"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().trim().is_empty() {
                        return Err(syn::Error::new(lit.span(), "`type_path` cannot be empty"));
                    }
                    this.type_path = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("extends") {
                    let content;
                    syn::parenthesized!(content in meta.input);
                    let paths = content.parse_terminated(Path::parse_mod_style, Token![,])?;
                    this.extends.extend(paths);
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    this.auto_register = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    Err(meta.error("`skip` can only be applied to fields"))
                } else {
                    Err(meta.error("unsupported `object` attribute"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes applied to a field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[object(skip)]`
    pub skip: bool,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(OBJECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `skip`"))
                }
            })?;
        }

        Ok(this)
    }
}
