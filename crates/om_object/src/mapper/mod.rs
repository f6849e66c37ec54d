//! Field mapping declarations.
//!
//! A type describes its fields once through an [`ObjectMapper`]:
//!
//! - type selectors: how a raw value is cast ([`ValueType`]);
//! - [`Rule`]s, stored per field in [`Rules`];
//! - a [`Projection`], custom transforms for both directions;
//! - `ignore`, excluding a field from assembly and disassembly.
//!
//! The result is an [`ObjectMetadata`], a `name -> FieldMetadata` mapping.

// -----------------------------------------------------------------------------
// Modules

mod metadata;
mod object_mapper;
mod rules;
mod value_type;

// -----------------------------------------------------------------------------
// Exports

pub use metadata::{FieldMetadata, ObjectMetadata, Projection, ProjectionFn};
pub use object_mapper::{ObjectMapper, Selection};
pub use rules::{Pattern, Rule, RuleKind, Rules};
pub use value_type::ValueType;
