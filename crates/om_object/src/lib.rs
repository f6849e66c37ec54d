//! Declarative object hydration.
//!
//! A type declares once, through [`ObjectMapper`](mapper::ObjectMapper), how each
//! of its fields is typed, projected and validated. The assembly engine then turns
//! raw key-value mappings ([`RawMap`](value::RawMap)) into typed instances, and
//! disassembly turns instances back into plain mappings.
//!
//! ```
//! use om_object::derive::Object;
//! use om_object::mapper::ObjectMapper;
//! use om_object::{Assemble, MappingError, raw_map};
//!
//! #[derive(Object, Default)]
//! struct Account {
//!     id: i64,
//!     name: Option<String>,
//!     active: bool,
//! }
//!
//! impl Assemble for Account {
//!     fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
//!         m.select(["id"]).as_integer()
//!             .select(["name"]).as_string()
//!             .select(["active"]).as_boolean();
//!         Ok(())
//!     }
//! }
//!
//! let account = Account::assemble(&raw_map! {
//!     "id" => "42",
//!     "name" => 7,
//!     "active" => "yes",
//! }).unwrap();
//!
//! assert_eq!(account.id, 42);
//! assert_eq!(account.name.as_deref(), Some("7"));
//! assert!(account.active);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// Derive output names this crate as `om_object`, including inside the crate's own tests.
extern crate self as om_object;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod object;

pub mod assemble;
pub mod info;
pub mod mapper;
pub mod registry;
pub mod serde;
pub mod validate;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use assemble::{Assemble, AssembleConfig, Assembler, ValidationMode};
pub use error::{AssembleError, MappingError};
pub use info::{DynamicTypePath, DynamicTyped};
pub use object::{FieldError, Object};
pub use om_object_derive as derive;
