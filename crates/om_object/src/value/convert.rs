use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::{FieldError, Object};
use crate::value::{ArrayObject, ObjectRef, RawMap, Value};

// -----------------------------------------------------------------------------
// FromValue

/// Strict conversion from a [`Value`] into a field type.
///
/// Only the variants that already represent the target are accepted; the
/// coercion table lives in the assembly engine, not here. Besides the exact
/// variant, floats accept `Int` and integers accept any in-range `Int`.
///
/// # Examples
///
/// ```
/// use om_object::value::{FromValue, Value};
///
/// assert_eq!(u8::from_value(Value::Int(7)), Ok(7));
/// assert!(u8::from_value(Value::Int(300)).is_err());
/// assert!(i64::from_value(Value::from("7")).is_err());
/// assert_eq!(Option::<String>::from_value(Value::Null), Ok(None));
/// ```
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, FieldError>;
}

// -----------------------------------------------------------------------------
// ToValue

/// Conversion of a field into a [`Value`], used by generated getters.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

// -----------------------------------------------------------------------------
// Impls

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> Result<Self, FieldError> {
        Ok(value)
    }
}

impl ToValue for Value {
    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }
}

macro_rules! impl_simple {
    ($ty:ty, $variant:ident) => {
        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, FieldError> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(FieldError::mismatch::<$ty>(&other)),
                }
            }
        }

        impl ToValue for $ty {
            #[inline]
            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }
        }
    };
}

impl_simple!(bool, Bool);
impl_simple!(String, String);
impl_simple!(NaiveDateTime, Temporal);
impl_simple!(ArrayObject, Container);
impl_simple!(RawMap, Map);
impl_simple!(ObjectRef, Object);

macro_rules! impl_integer {
    ($($ty:ty),*) => {$(
        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, FieldError> {
                match value {
                    Value::Int(v) => <$ty>::try_from(v).map_err(|_| FieldError::OutOfRange {
                        value: v,
                        target: stringify!($ty),
                    }),
                    other => Err(FieldError::mismatch::<$ty>(&other)),
                }
            }
        }

        impl ToValue for $ty {
            #[inline]
            fn to_value(&self) -> Value {
                // Only `u64`/`usize` above `i64::MAX` miss, those degrade to a float.
                i64::try_from(*self).map_or(Value::Float(*self as f64), Value::Int)
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float {
    ($($ty:ty),*) => {$(
        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, FieldError> {
                match value {
                    Value::Float(v) => Ok(v as $ty),
                    Value::Int(v) => Ok(v as $ty),
                    other => Err(FieldError::mismatch::<$ty>(&other)),
                }
            }
        }

        impl ToValue for $ty {
            #[inline]
            fn to_value(&self) -> Value {
                Value::Float(f64::from(*self))
            }
        }
    )*};
}

impl_float!(f32, f64);

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, FieldError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    #[inline]
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, FieldError> {
        match value {
            Value::List(list) => list.into_iter().map(T::from_value).collect(),
            other => Err(FieldError::mismatch::<Self>(&other)),
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: Object> FromValue for Arc<T> {
    fn from_value(value: Value) -> Result<Self, FieldError> {
        match &value {
            Value::Object(object) => object
                .downcast_arc::<T>()
                .ok_or_else(|| FieldError::mismatch::<T>(&value)),
            _ => Err(FieldError::mismatch::<T>(&value)),
        }
    }
}

impl<T: Object> ToValue for Arc<T> {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Object(ObjectRef::from_arc(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use crate::FieldError;
    use crate::value::{FromValue, ToValue, Value, ValueKind};

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(i8::from_value(Value::Int(-128)), Ok(-128));
        assert_eq!(
            u16::from_value(Value::Int(-1)),
            Err(FieldError::OutOfRange { value: -1, target: "u16" }),
        );
        assert_eq!(u64::MAX.to_value(), Value::Float(u64::MAX as f64));
    }

    #[test]
    fn floats_accept_integers() {
        assert_eq!(f64::from_value(Value::Int(2)), Ok(2.0));
        assert_eq!(f32::from_value(Value::Float(0.5)), Ok(0.5));
        assert!(f64::from_value(Value::Null).is_err());
    }

    #[test]
    fn nested_containers() {
        let list = Value::List(vec![Value::Int(1), Value::Null]);
        assert_eq!(
            Vec::<Option<i32>>::from_value(list.clone()),
            Ok(vec![Some(1), None]),
        );
        assert_eq!(vec![Some(1_i32), None].to_value(), list);

        let err = Vec::<i32>::from_value(Value::Int(1)).unwrap_err();
        assert!(matches!(err, FieldError::Mismatch { found: ValueKind::Int, .. }));
    }
}
