use core::any::TypeId;

use om_utils::hash::HashMap;

use crate::info::{FieldInfo, TypePath, Typed};

/// Compile-time description of an [`Object`](crate::Object) type.
///
/// Holds the field list in declaration order and the declared ancestors
/// used by [`is_a`](Self::is_a).
///
/// Usually built by [`#[derive(Object)]`](crate::derive::Object) and cached
/// in an [`ObjectInfoCell`](crate::info::ObjectInfoCell).
///
/// # Examples
///
/// ```
/// use om_object::derive::Object;
/// use om_object::info::{TypePath, Typed};
///
/// #[derive(Object, Default)]
/// struct Animal {
///     name: String,
/// }
///
/// #[derive(Object, Default)]
/// #[object(extends(Animal))]
/// struct Dog {
///     name: String,
///     good: bool,
/// }
///
/// let info = Dog::object_info();
/// assert_eq!(info.field_names().collect::<Vec<_>>(), ["name", "good"]);
/// assert!(info.is_a(Dog::type_path()));
/// assert!(info.is_a(Animal::type_path()));
/// assert!(!Animal::object_info().is_a(Dog::type_path()));
/// ```
#[derive(Clone, Debug)]
pub struct ObjectInfo {
    type_path: &'static str,
    type_name: &'static str,
    type_id: TypeId,
    fields: Box<[FieldInfo]>,
    indices: HashMap<&'static str, usize>,
    // Function pointers delay the parent's info until first `is_a`.
    parents: Vec<fn() -> &'static ObjectInfo>,
}

impl ObjectInfo {
    /// Creates a new [`ObjectInfo`] for `T`.
    ///
    /// The field order follows the input order.
    pub fn new<T: TypePath>(fields: &[FieldInfo]) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            type_path: T::type_path(),
            type_name: T::type_name(),
            type_id: TypeId::of::<T>(),
            fields: fields.into(),
            indices,
            parents: Vec::new(),
        }
    }

    /// Declares `P` as a direct ancestor.
    ///
    /// Ancestor chains must be acyclic.
    #[must_use]
    pub fn with_parent<P: Typed>(mut self) -> Self {
        self.parents.push(P::object_info);
        self
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the [`FieldInfo`] for `name`, if present.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.indices.get(name).map(|&index| &self.fields[index])
    }

    /// Returns `true` if the type has a field named `name`.
    #[inline]
    pub fn has_field(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Returns the fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldInfo::name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over the direct ancestors.
    pub fn parents(&self) -> impl ExactSizeIterator<Item = &'static ObjectInfo> + '_ {
        self.parents.iter().map(|parent| parent())
    }

    /// Returns `true` if this type is `type_path` or transitively declares
    /// it as an ancestor.
    pub fn is_a(&self, type_path: &str) -> bool {
        self.type_path == type_path || self.parents().any(|parent| parent.is_a(type_path))
    }
}
