//! The raw value model.
//!
//! - [`Value`]: one raw or typed value.
//! - [`RawMap`]: an insertion-ordered `name -> Value` mapping, the input of
//!   assembly and the output of disassembly.
//! - [`ArrayObject`]: the opaque array-like container.
//! - [`ObjectRef`]: a shared handle to an instance of some [`Object`](crate::Object) type.
//! - [`FromValue`] / [`ToValue`]: conversions used by generated field accessors.

// -----------------------------------------------------------------------------
// Modules

mod array_object;
mod convert;
mod object_ref;
mod raw_map;

// -----------------------------------------------------------------------------
// Exports

pub use array_object::ArrayObject;
pub use convert::{FromValue, ToValue};
pub use object_ref::ObjectRef;
pub use raw_map::RawMap;

use core::fmt;

use chrono::NaiveDateTime;

// -----------------------------------------------------------------------------
// ValueKind

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
    Temporal,
    Container,
    Object,
}

impl ValueKind {
    /// Returns a short lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
            Self::Temporal => "temporal",
            Self::Container => "container",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Value

/// A dynamically typed value.
///
/// Raw input mappings hold whatever a row or payload carried; after assembly
/// the same enum carries the coerced value handed to the field setter.
///
/// `Temporal`, `Container` and `Object` are "object" values: they bypass the
/// scalar cast table, see [`Value::is_object`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(RawMap),
    Temporal(NaiveDateTime),
    Container(ArrayObject),
    Object(ObjectRef),
}

impl Value {
    /// Returns the variant of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
            Self::Temporal(_) => ValueKind::Temporal,
            Self::Container(_) => ValueKind::Container,
            Self::Object(_) => ValueKind::Object,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for values that are already objects rather than primitives.
    ///
    /// `Temporal` and `Container` are the built-in object kinds; `Object` holds
    /// an instance of a user type.
    #[inline]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Temporal(_) | Self::Container(_) | Self::Object(_))
    }

    /// Returns `true` for `List` and `Map`, the array-like primitives.
    #[inline]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Truthiness coercion.
    ///
    /// `Null`, `false`, `0`, `0.0`, `""`, `"0"` and empty lists or maps are
    /// falsy. Everything else, including every object value, is truthy.
    ///
    /// ```
    /// use om_object::value::Value;
    ///
    /// assert!(Value::from(2).is_truthy());
    /// assert!(Value::from("true").is_truthy());
    /// assert!(!Value::from("0").is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !(s.is_empty() || s == "0"),
            Self::List(list) => !list.is_empty(),
            Self::Map(map) => !map.is_empty(),
            Self::Temporal(_) | Self::Container(_) | Self::Object(_) => true,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value of `Int` and `Float`.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_temporal(&self) -> Option<&NaiveDateTime> {
        match self {
            Self::Temporal(t) => Some(t),
            _ => None,
        }
    }

    #[inline]
    pub fn as_container(&self) -> Option<&ArrayObject> {
        match self {
            Self::Container(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// From

macro_rules! impl_from_int {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<RawMap> for Value {
    #[inline]
    fn from(value: RawMap) -> Self {
        Self::Map(value)
    }
}

impl From<NaiveDateTime> for Value {
    #[inline]
    fn from(value: NaiveDateTime) -> Self {
        Self::Temporal(value)
    }
}

impl From<ArrayObject> for Value {
    #[inline]
    fn from(value: ArrayObject) -> Self {
        Self::Container(value)
    }
}

impl From<ObjectRef> for Value {
    #[inline]
    fn from(value: ObjectRef) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
