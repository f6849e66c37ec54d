use core::fmt;

use regex::Regex;

use crate::value::Value;

// -----------------------------------------------------------------------------
// RuleKind

/// The name of a validation rule, without its arguments.
///
/// A field holds at most one rule per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    NotEmpty,
    Between,
    Email,
    StartsWith,
    EndsWith,
    Equals,
    NotEquals,
    File,
    Url,
    In,
    NotIn,
    Length,
    Max,
    Min,
    Regex,
}

impl RuleKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotEmpty => "not_empty",
            Self::Between => "between",
            Self::Email => "email",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::Equals => "equals",
            Self::NotEquals => "not_equals",
            Self::File => "file",
            Self::Url => "url",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Length => "length",
            Self::Max => "max",
            Self::Min => "min",
            Self::Regex => "regex",
        }
    }
}

impl fmt::Display for RuleKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Pattern

/// A regular expression compiled when the rule is declared.
///
/// A pattern that fails to compile is kept with its error; the rule then
/// fails every value it is checked against.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: Box<str>,
    compiled: Result<Regex, regex::Error>,
}

impl Pattern {
    pub fn new(source: &str) -> Self {
        let compiled = Regex::new(source);
        if let Err(err) = &compiled {
            log::warn!("invalid `regex` rule pattern `{source}`: {err}");
        }
        Self {
            source: source.into(),
            compiled,
        }
    }

    /// Returns the pattern as written.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the compiled expression, or the compile error.
    #[inline]
    pub fn regex(&self) -> Result<&Regex, &regex::Error> {
        self.compiled.as_ref()
    }
}

impl PartialEq for Pattern {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

// -----------------------------------------------------------------------------
// Rule

/// A validation rule with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// The value is truthy.
    NotEmpty,
    /// A number in `min..=max`.
    Between { min: f64, max: f64 },
    Email,
    StartsWith(String),
    EndsWith(String),
    Equals(Value),
    NotEquals(Value),
    /// A path naming an existing regular file.
    File,
    Url,
    In(Vec<Value>),
    NotIn(Vec<Value>),
    /// A string's char count, or a list's element count, in `min..=max`.
    Length { min: usize, max: usize },
    Max(f64),
    Min(f64),
    Regex(Pattern),
}

impl Rule {
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::NotEmpty => RuleKind::NotEmpty,
            Self::Between { .. } => RuleKind::Between,
            Self::Email => RuleKind::Email,
            Self::StartsWith(_) => RuleKind::StartsWith,
            Self::EndsWith(_) => RuleKind::EndsWith,
            Self::Equals(_) => RuleKind::Equals,
            Self::NotEquals(_) => RuleKind::NotEquals,
            Self::File => RuleKind::File,
            Self::Url => RuleKind::Url,
            Self::In(_) => RuleKind::In,
            Self::NotIn(_) => RuleKind::NotIn,
            Self::Length { .. } => RuleKind::Length,
            Self::Max(_) => RuleKind::Max,
            Self::Min(_) => RuleKind::Min,
            Self::Regex(_) => RuleKind::Regex,
        }
    }
}

// -----------------------------------------------------------------------------
// Rules

/// The rules of one field, keyed by [`RuleKind`].
///
/// Inserting a rule of a kind already present replaces its arguments and
/// keeps the position of the first declaration.
///
/// # Examples
///
/// ```
/// use om_object::mapper::{Rule, RuleKind, Rules};
///
/// let mut rules = Rules::new();
/// rules.insert(Rule::Min(1.0));
/// rules.insert(Rule::NotEmpty);
/// rules.insert(Rule::Min(5.0));
///
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules.get(RuleKind::Min), Some(&Rule::Min(5.0)));
/// assert_eq!(
///     rules.kinds().collect::<Vec<_>>(),
///     [RuleKind::Min, RuleKind::NotEmpty],
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rules(Vec<Rule>);

impl Rules {
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts `rule`, returning the rule of the same kind it replaced.
    pub fn insert(&mut self, rule: Rule) -> Option<Rule> {
        let kind = rule.kind();
        match self.0.iter_mut().find(|r| r.kind() == kind) {
            Some(slot) => Some(core::mem::replace(slot, rule)),
            None => {
                self.0.push(rule);
                None
            }
        }
    }

    pub fn get(&self, kind: RuleKind) -> Option<&Rule> {
        self.0.iter().find(|r| r.kind() == kind)
    }

    #[inline]
    pub fn contains(&self, kind: RuleKind) -> bool {
        self.get(kind).is_some()
    }

    /// Iterates over the rules in order of first declaration.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Rule> {
        self.0.iter()
    }

    #[inline]
    pub fn kinds(&self) -> impl ExactSizeIterator<Item = RuleKind> + '_ {
        self.0.iter().map(Rule::kind)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Rules {
    type Item = &'a Rule;
    type IntoIter = core::slice::Iter<'a, Rule>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
