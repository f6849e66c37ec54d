// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// `type_path` is the identity used by instance checks: `as_instance::<T>()`
/// records it and an object value is accepted when its own path or one of its
/// ancestors' paths matches.
///
/// Names never carry a leading `::`.
///
/// # Implementation
///
/// [`#[derive(Object)]`](crate::derive::Object) implements it:
///
/// ```
/// use om_object::derive::Object;
/// use om_object::info::TypePath;
///
/// // Follows the module the type is defined in.
/// #[derive(Object, Default)]
/// struct Plain {}
///
/// // Never changes, even if the definition is moved.
/// #[derive(Object, Default)]
/// #[object(type_path = "billing::Invoice")]
/// struct Invoice {}
///
/// assert!(Plain::type_path().ends_with("::Plain"));
/// assert_eq!(Invoice::type_path(), "billing::Invoice");
/// assert_eq!(Invoice::type_name(), "Invoice");
/// ```
pub trait TypePath: 'static {
    /// The unique path of the type, e.g. `billing::Invoice`.
    fn type_path() -> &'static str;

    /// The type name without module path, e.g. `Invoice`.
    fn type_name() -> &'static str;
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`].
///
/// Implemented for every `TypePath` type.
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }
}
