use core::fmt;
use std::borrow::Cow;

/// The declared type of a field.
///
/// A field without a `ValueType` is left untyped: only `null` and object
/// values pass the cast.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    Integer,
    Float,
    String,
    List,
    Temporal,
    /// The opaque array-like container, see [`ArrayObject`](crate::value::ArrayObject).
    Container,
    /// An object whose type path is, or declares as an ancestor, this path.
    Instance(Cow<'static, str>),
}

impl ValueType {
    /// Returns the path of an `Instance` type.
    #[inline]
    pub fn instance_path(&self) -> Option<&str> {
        match self {
            Self::Instance(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("boolean"),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::String => f.write_str("string"),
            Self::List => f.write_str("list"),
            Self::Temporal => f.write_str("temporal"),
            Self::Container => f.write_str("container"),
            Self::Instance(path) => write!(f, "instance of `{path}`"),
        }
    }
}
