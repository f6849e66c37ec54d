use std::sync::OnceLock;

use crate::info::{ObjectInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to an [`ObjectInfo`].
///
/// Implemented by [`#[derive(Object)]`](crate::derive::Object), giving access
/// to the field list without an instance.
///
/// # Manually Impl
///
/// Not recommended. [`ObjectInfoCell`] keeps the info computed once:
///
/// ```
/// use om_object::info::{FieldInfo, ObjectInfo, ObjectInfoCell, TypePath, Typed};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl TypePath for Point {
///     fn type_path() -> &'static str { "geo::Point" }
///     fn type_name() -> &'static str { "Point" }
/// }
///
/// impl Typed for Point {
///     fn object_info() -> &'static ObjectInfo {
///         static CELL: ObjectInfoCell = ObjectInfoCell::new();
///         CELL.get_or_init(|| ObjectInfo::new::<Self>(&[
///             FieldInfo::new::<i64>("x"),
///             FieldInfo::new::<i64>("y"),
///         ]))
///     }
/// }
///
/// assert!(Point::object_info().has_field("y"));
/// ```
pub trait Typed: TypePath {
    /// Note: Use [`DynamicTyped`] for dynamic dispatch.
    fn object_info() -> &'static ObjectInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Implemented for every `Typed` type.
pub trait DynamicTyped {
    /// See [`Typed::object_info`].
    fn reflect_object_info(&self) -> &'static ObjectInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_object_info(&self) -> &'static ObjectInfo {
        Self::object_info()
    }
}

// -----------------------------------------------------------------------------
// ObjectInfoCell

/// Static storage for the [`ObjectInfo`] of one type.
///
/// Internally an [`OnceLock`], so the info is built at most once even under
/// concurrent first access. Only usable for non-generic types, since a
/// `static` inside a generic function is shared by every instantiation.
pub struct ObjectInfoCell(OnceLock<ObjectInfo>);

impl ObjectInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, generating it with `f` on first call.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &ObjectInfo
    where
        F: FnOnce() -> ObjectInfo,
    {
        self.0.get_or_init(f)
    }
}

impl Default for ObjectInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
