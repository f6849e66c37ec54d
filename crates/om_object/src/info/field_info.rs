use core::any::{Any, TypeId};

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for one named field of an [`Object`](crate::Object) type.
///
/// # Examples
///
/// ```
/// use om_object::derive::Object;
/// use om_object::info::Typed;
///
/// #[derive(Object, Default)]
/// struct Foo {
///     count: u32,
/// }
///
/// let field = Foo::object_info().field("count").unwrap();
/// assert_eq!(field.name(), "count");
/// assert!(field.type_is::<u32>());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FieldInfo {
    name: &'static str,
    type_id: TypeId,
    type_name: &'static str,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for the field `name` of type `T`.
    #[inline]
    pub fn new<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the compiler's name of the field type.
    ///
    /// Only meant for diagnostics, the format is not stable.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if the field type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}
