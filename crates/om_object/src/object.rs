use core::any::Any;

use thiserror::Error;

use crate::info::{DynamicTypePath, DynamicTyped};
use crate::value::{Value, ValueKind};

// -----------------------------------------------------------------------------
// Object

/// Reflective access to the named fields of a type.
///
/// This is the only view the assembly engine has of a target type: the field
/// list from [`DynamicTyped`], a getter and a setter, all by field name.
///
/// Implemented by [`#[derive(Object)]`](crate::derive::Object); implementing
/// it by hand is possible but not recommended.
///
/// # Examples
///
/// ```
/// use om_object::Object;
/// use om_object::derive::Object;
/// use om_object::value::Value;
///
/// #[derive(Object, Default)]
/// struct Foo {
///     count: i64,
/// }
///
/// let mut foo = Foo::default();
/// foo.set_field("count", Value::Int(3)).unwrap();
///
/// assert_eq!(foo.count, 3);
/// assert_eq!(foo.field_value("count"), Some(Value::Int(3)));
/// assert!(foo.field_value("missing").is_none());
/// assert!(foo.set_field("count", Value::from("3")).is_err());
/// ```
pub trait Object: DynamicTypePath + DynamicTyped + Any + Send + Sync {
    /// Returns the current value of the field `name`, or `None` if there is
    /// no such field.
    fn field_value(&self, name: &str) -> Option<Value>;

    /// Replaces the field `name` with `value`.
    ///
    /// The value is converted strictly through
    /// [`FromValue`](crate::value::FromValue), no coercion happens here.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), FieldError>;
}

// -----------------------------------------------------------------------------
// FieldError

/// A field setter refused a value.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FieldError {
    /// The type has no field with this name.
    #[error("no field named `{0}`")]
    Missing(Box<str>),
    /// The value's variant cannot represent the field type.
    #[error("expected `{expected}`, found {found}")]
    Mismatch {
        expected: &'static str,
        found: ValueKind,
    },
    /// An integer does not fit the field's integer width.
    #[error("{value} is out of range for `{target}`")]
    OutOfRange { value: i64, target: &'static str },
}

impl FieldError {
    /// Shorthand for [`FieldError::Mismatch`].
    #[inline]
    pub fn mismatch<T: ?Sized>(found: &Value) -> Self {
        Self::Mismatch {
            expected: core::any::type_name::<T>(),
            found: found.kind(),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::derive::Object;
    use crate::info::{TypePath, Typed};
    use crate::value::{ObjectRef, Value, ValueKind};
    use crate::{DynamicTypePath, FieldError, Object};

    #[derive(Object, Default)]
    #[object(type_path = "billing::Invoice")]
    struct Invoice {
        number: u32,
        note: Option<String>,
        #[object(skip)]
        cache: Vec<u8>,
    }

    #[derive(Object, Default)]
    struct Line {
        invoice: Option<Arc<Invoice>>,
    }

    #[test]
    fn custom_type_path() {
        assert_eq!(Invoice::type_path(), "billing::Invoice");
        assert_eq!(Invoice::type_name(), "Invoice");
        assert_eq!(Line::type_name(), "Line");
        assert!(Line::type_path().ends_with("::Line"));
        assert_eq!(Invoice::default().reflect_type_path(), "billing::Invoice");
    }

    #[test]
    fn skipped_fields_are_hidden() {
        let info = Invoice::object_info();
        assert_eq!(info.field_names().collect::<Vec<_>>(), ["number", "note"]);
        assert!(info.field("number").unwrap().type_is::<u32>());

        let mut invoice = Invoice::default();
        assert_eq!(
            invoice.set_field("cache", Value::List(vec![])),
            Err(FieldError::Missing("cache".into())),
        );
        assert!(invoice.field_value("cache").is_none());
        assert!(invoice.cache.is_empty());
    }

    #[test]
    fn setters_are_strict() {
        let mut invoice = Invoice::default();
        invoice.set_field("number", Value::Int(7)).unwrap();
        invoice.set_field("note", Value::from("paid")).unwrap();
        assert_eq!(invoice.number, 7);
        assert_eq!(invoice.note.as_deref(), Some("paid"));

        assert!(matches!(
            invoice.set_field("number", Value::Int(-1)),
            Err(FieldError::OutOfRange { value: -1, .. }),
        ));
        assert!(matches!(
            invoice.set_field("note", Value::Int(1)),
            Err(FieldError::Mismatch { found: ValueKind::Int, .. }),
        ));
        invoice.set_field("note", Value::Null).unwrap();
        assert_eq!(invoice.note, None);
    }

    #[test]
    fn object_fields() {
        let invoice = Arc::new(Invoice::default());
        let mut line = Line::default();
        line.set_field("invoice", Value::Object(ObjectRef::from_arc(invoice.clone())))
            .unwrap();
        assert!(Arc::ptr_eq(line.invoice.as_ref().unwrap(), &invoice));

        let other = ObjectRef::new(Line::default());
        assert!(line.set_field("invoice", Value::Object(other)).is_err());
    }
}
