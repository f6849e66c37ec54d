use core::ops::{Deref, DerefMut};

use crate::value::Value;

/// The opaque array-like container.
///
/// Unlike a plain [`Value::List`], an `ArrayObject` counts as an object:
/// assembly passes it through unchanged wherever an object is acceptable.
/// Fields tagged with `as_container()` receive one.
///
/// # Examples
///
/// ```
/// use om_object::value::{ArrayObject, Value};
///
/// let mut items = ArrayObject::new();
/// items.push(Value::from(1));
/// items.push(Value::from("two"));
///
/// assert_eq!(items.len(), 2);
/// assert_eq!(items.into_inner(), vec![Value::Int(1), Value::from("two")]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayObject(Vec<Value>);

impl ArrayObject {
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Consumes the container and returns its elements.
    #[inline]
    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl Deref for ArrayObject {
    type Target = Vec<Value>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ArrayObject {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Value>> for ArrayObject {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self(value)
    }
}

impl FromIterator<Value> for ArrayObject {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ArrayObject {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
