use thiserror::Error;

use crate::AssembleError;
use crate::assemble::{format_temporal, parse_temporal};
use crate::mapper::ValueType;
use crate::value::{ArrayObject, Value, ValueKind};

// -----------------------------------------------------------------------------
// CastError

/// A value could not be reconciled with its declared type.
///
/// Carries no field context; the engine converts it into an
/// [`AssembleError`] naming the type and field.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CastError {
    #[error("expected {expected}, found {found}")]
    Mismatch { expected: String, found: ValueKind },
    #[error("`{input}` is not a valid date-time")]
    InvalidTemporal { input: String },
}

impl CastError {
    fn mismatch(value_type: Option<&ValueType>, found: &Value) -> Self {
        let expected = match value_type {
            Some(value_type) => value_type.to_string(),
            None => String::from("null or object (untyped field)"),
        };
        Self::Mismatch {
            expected,
            found: found.kind(),
        }
    }

    /// Attaches the type and field the value was meant for.
    pub fn at(self, type_path: &'static str, field: &str) -> AssembleError {
        match self {
            Self::Mismatch { expected, found } => AssembleError::TypeMismatch {
                type_path,
                field: field.into(),
                expected,
                found,
            },
            Self::InvalidTemporal { input } => AssembleError::InvalidTemporal {
                type_path,
                field: field.into(),
                input,
            },
        }
    }
}

// -----------------------------------------------------------------------------
// cast

/// Coerces `value` to `value_type`.
///
/// Scalar tags (`boolean`, `integer`, `float`, `string`, `list`, `temporal`,
/// `container`) accept every value, objects included, and follow the scalar
/// cast table. Untyped and `instance` fields only accept `null` and object
/// values: temporal and container values pass unchanged, user objects must
/// be, or extend, the declared instance type. `temporal_format` is used
/// first when parsing temporal strings and when stringifying temporal values.
///
/// # Examples
///
/// ```
/// use om_object::assemble::cast;
/// use om_object::mapper::ValueType;
/// use om_object::value::Value;
///
/// let format = "%Y-%m-%d %H:%M:%S";
/// let int = Some(&ValueType::Integer);
///
/// assert_eq!(cast(Value::from("42abc"), int, format), Ok(Value::Int(42)));
/// assert_eq!(cast(Value::Null, int, format), Ok(Value::Int(0)));
/// assert_eq!(cast(Value::from("yes"), Some(&ValueType::Boolean), format), Ok(Value::Bool(true)));
/// assert_eq!(cast(Value::Null, Some(&ValueType::String), format), Ok(Value::Null));
/// assert!(cast(Value::Int(1), None, format).is_err());
/// ```
pub fn cast(
    value: Value,
    value_type: Option<&ValueType>,
    temporal_format: &str,
) -> Result<Value, CastError> {
    let Some(value_type) = value_type else {
        return match value {
            Value::Null => Ok(Value::Null),
            object if object.is_object() => cast_object(object, None),
            other => Err(CastError::mismatch(None, &other)),
        };
    };

    match value_type {
        ValueType::Boolean => Ok(Value::Bool(value.is_truthy())),
        ValueType::Integer => Ok(Value::Int(to_integer(&value))),
        ValueType::Float => Ok(Value::Float(to_float(&value))),
        ValueType::String => to_string(value, temporal_format)
            .map_err(|v| CastError::mismatch(Some(value_type), &v)),
        ValueType::List => Ok(match value {
            Value::Null => Value::List(Vec::new()),
            array @ (Value::List(_) | Value::Map(_)) => array,
            Value::Container(container) => Value::List(container.into_inner()),
            scalar => Value::List(vec![scalar]),
        }),
        ValueType::Temporal => match value {
            Value::Null => Ok(Value::Null),
            temporal @ Value::Temporal(_) => Ok(temporal),
            Value::String(input) => match parse_temporal(&input, temporal_format) {
                Some(parsed) => Ok(Value::Temporal(parsed)),
                None => Err(CastError::InvalidTemporal { input }),
            },
            other => Err(CastError::mismatch(Some(value_type), &other)),
        },
        ValueType::Container => Ok(match value {
            container @ Value::Container(_) => container,
            Value::List(list) => Value::Container(ArrayObject::from(list)),
            other => Value::Container(ArrayObject::from(vec![other])),
        }),
        ValueType::Instance(_) => match value {
            Value::Null => Ok(Value::Null),
            object if object.is_object() => cast_object(object, Some(value_type)),
            other => Err(CastError::mismatch(Some(value_type), &other)),
        },
    }
}

/// The instance check of untyped and `instance` fields.
fn cast_object(value: Value, value_type: Option<&ValueType>) -> Result<Value, CastError> {
    match (&value, value_type) {
        // Built-in object types pass under any instance declaration.
        (Value::Temporal(_) | Value::Container(_), _) => Ok(value),
        (Value::Object(object), Some(ValueType::Instance(path))) if object.is_a(path) => Ok(value),
        _ => Err(CastError::mismatch(value_type, &value)),
    }
}

// -----------------------------------------------------------------------------
// Scalar coercions

/// Best-effort integer reading. Non-numeric input yields `0`.
fn to_integer(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Int(i) => *i,
        // Saturating, NaN becomes 0.
        Value::Float(f) => *f as i64,
        Value::String(s) => parse_integer_prefix(s),
        Value::List(list) => i64::from(!list.is_empty()),
        Value::Map(map) => i64::from(!map.is_empty()),
        Value::Container(container) => i64::from(!container.is_empty()),
        Value::Temporal(_) | Value::Object(_) => 1,
    }
}

/// Best-effort float reading. Non-numeric input yields `0.0`.
fn to_float(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::String(s) => parse_float_prefix(s),
        other => to_integer(other) as f64,
    }
}

/// Stringifies a scalar. Lists, maps and containers are handed back as the
/// error.
///
/// Floats use Rust's `Display`: `1.0` becomes `"1"` and `1e20` is written out
/// in full as `"100000000000000000000"`, never in exponent notation.
/// Temporal values are written in `temporal_format`, user objects as their
/// type path.
fn to_string(value: Value, temporal_format: &str) -> Result<Value, Value> {
    Ok(match value {
        Value::Null => Value::Null,
        Value::Bool(true) => Value::from("1"),
        Value::Bool(false) => Value::from(""),
        Value::Int(i) => Value::String(i.to_string()),
        Value::Float(f) => Value::String(f.to_string()),
        string @ Value::String(_) => string,
        Value::Temporal(temporal) => Value::String(format_temporal(&temporal, temporal_format)),
        Value::Object(object) => Value::from(object.type_path()),
        other => return Err(other),
    })
}

/// Length of the leading `[+-]digits` run after whitespace.
fn integer_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 { 0 } else { sign + digits }
}

fn parse_integer_prefix(s: &str) -> i64 {
    let s = s.trim_start();
    let int_len = integer_prefix_len(s);

    // "1e3" and "2.5" read as numbers, not as their integer prefix.
    let float_len = float_prefix_len(s);
    if float_len > int_len {
        return parse_float_prefix(s) as i64;
    }
    if int_len == 0 {
        return 0;
    }

    let digits = &s[..int_len];
    digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Length of the leading decimal number, with optional fraction and exponent.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = bytes[exp.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let len = float_prefix_len(s);
    if len == 0 {
        return 0.0;
    }
    s[..len].parse().unwrap_or(0.0)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{CastError, cast, parse_float_prefix, parse_integer_prefix};
    use crate::mapper::ValueType;
    use crate::value::{ArrayObject, Value, ValueKind};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    fn cast_to(value: impl Into<Value>, value_type: ValueType) -> Result<Value, CastError> {
        cast(value.into(), Some(&value_type), FORMAT)
    }

    #[test]
    fn numeric_prefixes() {
        assert_eq!(parse_integer_prefix("42"), 42);
        assert_eq!(parse_integer_prefix("  -7 apples"), -7);
        assert_eq!(parse_integer_prefix("3.9"), 3);
        assert_eq!(parse_integer_prefix("1e3"), 1000);
        assert_eq!(parse_integer_prefix("abc"), 0);
        assert_eq!(parse_integer_prefix("99999999999999999999"), i64::MAX);

        assert_eq!(parse_float_prefix("2.5kg"), 2.5);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix("-"), 0.0);
    }

    #[test]
    fn integer_table() {
        assert_eq!(cast_to(Value::Null, ValueType::Integer), Ok(Value::Int(0)));
        assert_eq!(cast_to("42", ValueType::Integer), Ok(Value::Int(42)));
        assert_eq!(cast_to(9.99, ValueType::Integer), Ok(Value::Int(9)));
        assert_eq!(cast_to(true, ValueType::Integer), Ok(Value::Int(1)));
        assert_eq!(cast_to("n/a", ValueType::Integer), Ok(Value::Int(0)));
    }

    #[test]
    fn float_table() {
        assert_eq!(cast_to(Value::Null, ValueType::Float), Ok(Value::Float(0.0)));
        assert_eq!(cast_to("1.25", ValueType::Float), Ok(Value::Float(1.25)));
        assert_eq!(cast_to(3, ValueType::Float), Ok(Value::Float(3.0)));
        assert_eq!(cast_to("x", ValueType::Float), Ok(Value::Float(0.0)));
    }

    #[test]
    fn string_table() {
        assert_eq!(cast_to(Value::Null, ValueType::String), Ok(Value::Null));
        assert_eq!(cast_to(7, ValueType::String), Ok(Value::from("7")));
        assert_eq!(cast_to(1.5, ValueType::String), Ok(Value::from("1.5")));
        assert_eq!(cast_to(true, ValueType::String), Ok(Value::from("1")));
        assert_eq!(cast_to(false, ValueType::String), Ok(Value::from("")));

        let err = cast_to(Value::List(vec![]), ValueType::String).unwrap_err();
        assert!(matches!(err, CastError::Mismatch { found: ValueKind::List, .. }));
    }

    #[test]
    fn boolean_table() {
        for truthy in [Value::from(2), Value::from("yes"), Value::from("false")] {
            assert_eq!(cast_to(truthy, ValueType::Boolean), Ok(Value::Bool(true)));
        }
        for falsy in [Value::Null, Value::from(0), Value::from(""), Value::from("0")] {
            assert_eq!(cast_to(falsy, ValueType::Boolean), Ok(Value::Bool(false)));
        }
    }

    #[test]
    fn list_table() {
        assert_eq!(cast_to(Value::Null, ValueType::List), Ok(Value::List(vec![])));
        assert_eq!(cast_to(5, ValueType::List), Ok(Value::List(vec![Value::Int(5)])));

        let list = Value::List(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(cast_to(list.clone(), ValueType::List), Ok(list));

        let map = Value::Map(crate::raw_map! { "a" => 1 });
        assert_eq!(cast_to(map.clone(), ValueType::List), Ok(map));
    }

    #[test]
    fn temporal_table() {
        assert_eq!(cast_to(Value::Null, ValueType::Temporal), Ok(Value::Null));

        let parsed = cast_to("2020-01-01 00:00:00", ValueType::Temporal).unwrap();
        assert_eq!(parsed.as_temporal().unwrap().to_string(), "2020-01-01 00:00:00");
        assert_eq!(cast_to(parsed.clone(), ValueType::Temporal), Ok(parsed));

        assert_eq!(
            cast_to("soon", ValueType::Temporal),
            Err(CastError::InvalidTemporal { input: "soon".into() }),
        );
        assert!(matches!(
            cast_to(20200101, ValueType::Temporal),
            Err(CastError::Mismatch { found: ValueKind::Int, .. }),
        ));
    }

    #[test]
    fn container_table() {
        let list = vec![Value::Int(1)];
        assert_eq!(
            cast_to(Value::List(list.clone()), ValueType::Container),
            Ok(Value::Container(ArrayObject::from(list))),
        );
        assert_eq!(
            cast_to("a", ValueType::Container),
            Ok(Value::Container(ArrayObject::from(vec![Value::from("a")]))),
        );
    }

    #[test]
    fn untyped_and_instance() {
        assert_eq!(cast(Value::Null, None, FORMAT), Ok(Value::Null));
        assert!(cast(Value::from("x"), None, FORMAT).is_err());

        let instance = ValueType::Instance("a::B".into());
        assert_eq!(cast_to(Value::Null, instance.clone()), Ok(Value::Null));
        assert!(matches!(
            cast_to(3, instance),
            Err(CastError::Mismatch { found: ValueKind::Int, .. }),
        ));
    }

    #[test]
    fn builtin_objects_under_instance_tags() {
        let container = Value::Container(ArrayObject::default());
        for value_type in [None, Some(ValueType::Instance("x::Y".into()))] {
            assert_eq!(cast(container.clone(), value_type.as_ref(), FORMAT), Ok(container.clone()));
        }
    }

    #[test]
    fn builtin_objects_under_scalar_tags() {
        let temporal = cast_to("2020-01-02 03:04:05", ValueType::Temporal).unwrap();
        assert_eq!(cast_to(temporal.clone(), ValueType::Integer), Ok(Value::Int(1)));
        assert_eq!(cast_to(temporal.clone(), ValueType::Float), Ok(Value::Float(1.0)));
        assert_eq!(cast_to(temporal.clone(), ValueType::Boolean), Ok(Value::Bool(true)));
        assert_eq!(
            cast_to(temporal.clone(), ValueType::String),
            Ok(Value::from("2020-01-02 03:04:05")),
        );
        assert_eq!(
            cast(temporal.clone(), Some(&ValueType::String), "%d/%m/%Y"),
            Ok(Value::from("02/01/2020")),
        );
        assert_eq!(
            cast_to(temporal.clone(), ValueType::Container),
            Ok(Value::Container(ArrayObject::from(vec![temporal.clone()]))),
        );

        let empty = Value::Container(ArrayObject::default());
        let filled = Value::Container(ArrayObject::from(vec![Value::Int(7)]));
        assert_eq!(cast_to(empty, ValueType::Integer), Ok(Value::Int(0)));
        assert_eq!(cast_to(filled.clone(), ValueType::Integer), Ok(Value::Int(1)));
        assert_eq!(cast_to(filled.clone(), ValueType::List), Ok(Value::List(vec![Value::Int(7)])));
        assert!(matches!(
            cast_to(filled.clone(), ValueType::String),
            Err(CastError::Mismatch { found: ValueKind::Container, .. }),
        ));
        assert!(matches!(
            cast_to(filled, ValueType::Temporal),
            Err(CastError::Mismatch { found: ValueKind::Container, .. }),
        ));
    }

    #[test]
    fn large_floats_are_written_in_full() {
        assert_eq!(cast_to(1e20, ValueType::String), Ok(Value::from("100000000000000000000")));
        assert_eq!(cast_to(1.0, ValueType::String), Ok(Value::from("1")));
    }
}
