//! `serde` support.
//!
//! - [`Value`](crate::value::Value) and [`RawMap`](crate::value::RawMap)
//!   implement `Serialize` and `Deserialize`. Maps keep their entry order,
//!   integral numbers become `Int`. Temporal values are written in the default
//!   temporal format, containers as sequences, and user objects as a map of
//!   their fields.
//! - [`Serialized`] writes an [`Assemble`] type as its disassembled mapping.
//!
//! ```
//! use om_object::raw_map;
//! use om_object::value::RawMap;
//!
//! let raw: RawMap = serde_json::from_str(r#"{"id":"42","tags":["a"],"n":1.5}"#).unwrap();
//! assert_eq!(raw, raw_map! {
//!     "id" => "42",
//!     "tags" => vec![om_object::value::Value::from("a")],
//!     "n" => 1.5,
//! });
//! assert_eq!(serde_json::to_string(&raw).unwrap(), r#"{"id":"42","tags":["a"],"n":1.5}"#);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;

use serde_core::ser::Error;
use serde_core::{Serialize, Serializer};

use crate::Assemble;

// -----------------------------------------------------------------------------
// Serialized

/// Serializes an [`Assemble`] type through [`Assemble::to_raw`].
///
/// # Examples
///
/// ```
/// use om_object::derive::Object;
/// use om_object::mapper::ObjectMapper;
/// use om_object::serde::Serialized;
/// use om_object::{Assemble, MappingError};
///
/// #[derive(Object, Default)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Assemble for Point {
///     fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
///         m.select(["x", "y"]).as_integer();
///         Ok(())
///     }
/// }
///
/// let json = serde_json::to_string(&Serialized(&Point { x: 1, y: 2 })).unwrap();
/// assert_eq!(json, r#"{"x":1,"y":2}"#);
/// ```
pub struct Serialized<'a, T: Assemble>(pub &'a T);

impl<T: Assemble> Serialize for Serialized<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0
            .to_raw()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

// -----------------------------------------------------------------------------
// Tests
