use core::any::Any;
use core::fmt;
use std::sync::Arc;

use crate::Object;
use crate::info::ObjectInfo;

/// A shared handle to an instance of some [`Object`] type.
///
/// This is how user objects travel inside a [`Value`](crate::value::Value).
/// Cloning shares the instance, and equality is identity.
///
/// # Examples
///
/// ```
/// use om_object::derive::Object;
/// use om_object::value::ObjectRef;
///
/// #[derive(Object, Default)]
/// struct Tag {
///     label: String,
/// }
///
/// let tag = ObjectRef::new(Tag { label: "red".into() });
/// let same = tag.clone();
///
/// assert_eq!(tag, same);
/// assert_ne!(tag, ObjectRef::new(Tag { label: "red".into() }));
/// assert_eq!(tag.downcast_ref::<Tag>().unwrap().label, "red");
/// assert_eq!(tag.type_name(), "Tag");
/// ```
#[derive(Clone)]
pub struct ObjectRef(Arc<dyn Object>);

impl ObjectRef {
    /// Moves `value` into a new shared handle.
    #[inline]
    pub fn new<T: Object>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Wraps an existing shared instance.
    #[inline]
    pub fn from_arc<T: Object>(value: Arc<T>) -> Self {
        Self(value)
    }

    /// Returns the type path of the referenced instance.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.0.reflect_type_path()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.0.reflect_type_name()
    }

    /// Returns the [`ObjectInfo`] of the referenced instance.
    #[inline]
    pub fn info(&self) -> &'static ObjectInfo {
        self.0.reflect_object_info()
    }

    /// Returns `true` if the instance is of type `type_path` or of a type
    /// declaring it as an ancestor.
    #[inline]
    pub fn is_a(&self, type_path: &str) -> bool {
        self.info().is_a(type_path)
    }

    /// Returns the instance as a trait object.
    #[inline]
    pub fn as_object(&self) -> &dyn Object {
        &*self.0
    }

    /// Returns `true` if the instance is exactly a `T`.
    #[inline]
    pub fn is<T: Object>(&self) -> bool {
        let any: &dyn Any = &*self.0;
        any.is::<T>()
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        let any: &dyn Any = &*self.0;
        any.downcast_ref()
    }

    /// Returns a shared `Arc<T>` if the instance is exactly a `T`.
    pub fn downcast_arc<T: Object>(&self) -> Option<Arc<T>> {
        let any: Arc<dyn Any + Send + Sync> = self.0.clone();
        any.downcast().ok()
    }

    /// Returns `true` if both handles point at the same instance.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ObjectRef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectRef").field(&self.type_path()).finish()
    }
}

impl<T: Object> From<Arc<T>> for ObjectRef {
    #[inline]
    fn from(value: Arc<T>) -> Self {
        Self::from_arc(value)
    }
}
