//! Rule evaluation for [`ValidationMode::Strict`](crate::ValidationMode::Strict).
//!
//! Rules are checked against the value after casting. A `null` value passes
//! every rule except [`Rule::NotEmpty`].

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::mapper::{Rule, RuleKind, Rules};
use crate::value::Value;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("email pattern is valid")
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+[^\s]*$").expect("url pattern is valid")
});

// -----------------------------------------------------------------------------
// RuleViolation

/// A value failed a rule.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{value:?} violates the `{rule}` rule")]
pub struct RuleViolation {
    pub rule: RuleKind,
    pub value: Value,
}

// -----------------------------------------------------------------------------
// validate

/// Checks `value` against every rule in declaration order.
///
/// # Errors
///
/// Returns the first rule `value` fails.
///
/// # Examples
///
/// ```
/// use om_object::mapper::{Rule, RuleKind, Rules};
/// use om_object::validate::validate;
/// use om_object::value::Value;
///
/// let mut rules = Rules::new();
/// rules.insert(Rule::Length { min: 2, max: 4 });
/// rules.insert(Rule::StartsWith("a".into()));
///
/// assert!(validate(&Value::from("abc"), &rules).is_ok());
/// assert!(validate(&Value::Null, &rules).is_ok());
///
/// let violation = validate(&Value::from("bcd"), &rules).unwrap_err();
/// assert_eq!(violation.rule, RuleKind::StartsWith);
/// ```
pub fn validate(value: &Value, rules: &Rules) -> Result<(), RuleViolation> {
    match rules.iter().find(|rule| !check(rule, value)) {
        Some(rule) => Err(RuleViolation {
            rule: rule.kind(),
            value: value.clone(),
        }),
        None => Ok(()),
    }
}

/// Returns `true` if `value` satisfies `rule`.
pub fn check(rule: &Rule, value: &Value) -> bool {
    if value.is_null() {
        return !matches!(rule, Rule::NotEmpty);
    }

    match rule {
        Rule::NotEmpty => value.is_truthy(),
        Rule::Between { min, max } => value.as_f64().is_some_and(|n| *min <= n && n <= *max),
        Rule::Min(min) => value.as_f64().is_some_and(|n| n >= *min),
        Rule::Max(max) => value.as_f64().is_some_and(|n| n <= *max),
        Rule::Length { min, max } => length(value).is_some_and(|len| *min <= len && len <= *max),
        Rule::Email => value.as_str().is_some_and(|s| EMAIL.is_match(s)),
        Rule::Url => value.as_str().is_some_and(|s| URL.is_match(s)),
        Rule::Regex(pattern) => match (pattern.regex(), value.as_str()) {
            (Ok(regex), Some(s)) => regex.is_match(s),
            _ => false,
        },
        Rule::StartsWith(prefix) => value.as_str().is_some_and(|s| s.starts_with(prefix.as_str())),
        Rule::EndsWith(suffix) => value.as_str().is_some_and(|s| s.ends_with(suffix.as_str())),
        Rule::Equals(expected) => value == expected,
        Rule::NotEquals(expected) => value != expected,
        Rule::In(set) => set.contains(value),
        Rule::NotIn(set) => !set.contains(value),
        Rule::File => value
            .as_str()
            .is_some_and(|s| !s.is_empty() && Path::new(s).is_file()),
    }
}

fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::List(list) => Some(list.len()),
        Value::Map(map) => Some(map.len()),
        Value::Container(container) => Some(container.len()),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Tests
