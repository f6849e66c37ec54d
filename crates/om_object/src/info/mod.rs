//! Compile-time type information.
//!
//! - [`TypePath`] / [`DynamicTypePath`]: stable type paths.
//! - [`Typed`] / [`DynamicTyped`]: access to the [`ObjectInfo`] of a type.
//! - [`ObjectInfo`], [`FieldInfo`]: field list and ancestors.
//! - [`ObjectInfoCell`]: static storage used by generated `Typed` impls.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod object_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::FieldInfo;
pub use object_info::ObjectInfo;
pub use type_path::{DynamicTypePath, TypePath};
pub use typed::{DynamicTyped, ObjectInfoCell, Typed};
