use core::fmt;

use om_utils::hash::HashMap;

use crate::value::Value;

// -----------------------------------------------------------------------------
// RawMap

/// An insertion-ordered mapping from field names to [`Value`]s.
///
/// This is the raw side of every conversion: assembly walks its entries in
/// insertion order, disassembly produces one.
///
/// Inserting a name that already exists overwrites the value in place,
/// keeping the original position.
///
/// Equality ignores order: two maps are equal when they hold the same
/// names with equal values.
///
/// # Examples
///
/// ```
/// use om_object::value::{RawMap, Value};
///
/// let mut map = RawMap::new();
/// map.insert("id", 1);
/// map.insert("name", "alice");
/// map.insert("id", 2);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("id"), Some(&Value::Int(2)));
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["id", "name"]);
/// ```
///
/// The [`raw_map!`](crate::raw_map) macro builds one inline:
///
/// ```
/// use om_object::raw_map;
///
/// let map = raw_map! { "id" => "42", "active" => true };
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct RawMap {
    names: Vec<Box<str>>,
    values: Vec<Value>,
    indices: HashMap<Box<str>, usize>,
}

impl RawMap {
    /// Creates an empty `RawMap`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            names: Vec::new(),
            values: Vec::new(),
            indices: HashMap::with_hasher(om_utils::hash::FixedHashState),
        }
    }

    /// Creates an empty `RawMap` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts a value, returning the previous value for `name`.
    ///
    /// An existing name keeps its position.
    pub fn insert(&mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> Option<Value> {
        let name: Box<str> = name.into();
        let value: Value = value.into();
        if let Some(&index) = self.indices.get(&name) {
            return Some(core::mem::replace(&mut self.values[index], value));
        }
        self.indices.insert(name.clone(), self.names.len());
        self.names.push(name);
        self.values.push(value);
        None
    }

    /// Returns the value stored for `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = *self.indices.get(name)?;
        Some(&self.values[index])
    }

    /// Returns a mutable reference to the value stored for `name`.
    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        let index = *self.indices.get(name)?;
        Some(&mut self.values[index])
    }

    /// Returns `true` if the map holds `name`.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Removes `name`, shifting later entries down. O(N).
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.indices.remove(name)?;
        self.names.remove(index);
        let value = self.values.remove(index);
        for slot in self.indices.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(value)
    }

    /// Returns the position of `name` in insertion order.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.names.iter().map(|n| &**n).zip(self.values.iter())
    }

    /// Iterates over names in insertion order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(|n| &**n)
    }

    /// Iterates over values in insertion order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.values.iter()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl PartialEq for RawMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl fmt::Debug for RawMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<Box<str>>, V: Into<Value>> FromIterator<(K, V)> for RawMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Box<str>>, V: Into<Value>> Extend<(K, V)> for RawMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for RawMap {
    type Item = (Box<str>, Value);
    type IntoIter = core::iter::Zip<std::vec::IntoIter<Box<str>>, std::vec::IntoIter<Value>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter().zip(self.values)
    }
}

// -----------------------------------------------------------------------------
// raw_map!

/// Builds a [`RawMap`](crate::value::RawMap) from `name => value` pairs,
/// keeping their order.
///
/// Values go through `Into<Value>`.
///
/// ```
/// use om_object::raw_map;
/// use om_object::value::Value;
///
/// let map = raw_map! {
///     "id" => 42,
///     "name" => "alice",
///     "deleted_at" => Value::Null,
/// };
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["id", "name", "deleted_at"]);
/// ```
#[macro_export]
macro_rules! raw_map {
    () => {
        $crate::value::RawMap::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::value::RawMap::new();
        $( map.insert($name, $value); )+
        map
    }};
}
