//! See [`Object`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static OBJECT_ATTRIBUTE_NAME: &str = "object";

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod impls;
mod object_meta;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Object Derivation
///
/// `#[derive(Object)]` implements the following traits for a struct with
/// named fields:
///
/// - `TypePath`
/// - `Typed`
/// - `Object`
///
/// Every field type must implement `FromValue` and `ToValue`, and the type
/// itself is usually `Default` so that it can implement `Assemble`.
///
/// Generic types, tuple structs, unit structs, enums and unions are rejected.
///
/// ## Custom Type Path
///
/// The type path defaults to `module_path!()` followed by the type name.
/// It can be overridden at the type level:
///
/// ```rust, ignore
/// #[derive(Object)]
/// #[object(type_path = "billing::Invoice")]
/// struct Invoice { /* ... */ }
/// ```
///
/// The type name is always the last segment of the path.
///
/// ## Ancestors
///
/// `extends` names the types this one counts as for instance checks. Each
/// listed type must implement `Typed` itself; ancestors of ancestors are
/// followed. Cycles are not allowed.
///
/// ```rust, ignore
/// #[derive(Object)]
/// struct Animal { /* ... */ }
///
/// #[derive(Object)]
/// #[object(extends(Animal))]
/// struct Dog { /* ... */ }
/// ```
///
/// ## Hidden Fields
///
/// A field marked `skip` is not exposed: it is absent from the type info,
/// never assigned during assembly and never emitted by disassembly. Its type
/// needs no conversion traits.
///
/// ```rust, ignore
/// #[derive(Object, Default)]
/// struct Session {
///     id: i64,
///     #[object(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Auto Registration
///
/// With the `auto_register` feature, `#[object(auto_register)]` submits the
/// type so that `MetadataRegistry::auto_register` prepares its mapping ahead
/// of the first assembly. The type must implement `Assemble`.
///
/// This attribute is a no-op when the `auto_register` feature is disabled.
#[proc_macro_derive(Object, attributes(object))]
pub fn derive_object(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match object_meta::ObjectMeta::from_ast(&ast) {
        Ok(meta) => impls::impl_object(&meta).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
