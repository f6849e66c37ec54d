use std::borrow::Cow;

use crate::info::TypePath;
use crate::mapper::{FieldMetadata, ObjectMetadata, Pattern, Projection, Rule, ValueType};
use crate::value::{RawMap, Value};

// -----------------------------------------------------------------------------
// ObjectMapper

/// Fluent builder for an [`ObjectMetadata`].
///
/// [`select`](Self::select) picks a group of fields and returns a
/// [`Selection`]; every modifier on it applies to the whole group. Calling
/// `select` again, on the mapper or on the selection, starts a new group.
/// Selecting a field twice keeps its earlier declarations.
///
/// # Examples
///
/// ```
/// use om_object::mapper::{ObjectMapper, RuleKind, ValueType};
///
/// let mut m = ObjectMapper::new();
/// m.select(["id", "age"]).as_integer().min(0)
///     .select(["email"]).as_string().not_empty().email()
///     .select(["password"]).ignore();
///
/// let metadata = m.metadata();
/// assert_eq!(metadata.names().collect::<Vec<_>>(), ["id", "age", "email", "password"]);
/// assert_eq!(metadata.get("age").unwrap().value_type(), Some(&ValueType::Integer));
/// assert!(metadata.get("email").unwrap().rules().contains(RuleKind::Email));
/// assert!(metadata.get("password").unwrap().is_ignored());
/// assert!(metadata.get("unknown").is_none());
/// ```
#[derive(Debug, Default)]
pub struct ObjectMapper {
    metadata: ObjectMetadata,
}

impl ObjectMapper {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the fields the following modifiers apply to.
    ///
    /// An empty selection is accepted and changes nothing.
    pub fn select<I, S>(&mut self, names: I) -> Selection<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        let mut indices: Vec<usize> = names
            .into_iter()
            .map(|name| self.metadata.index_or_insert(name.into()))
            .collect();

        // Indices are dense, so a flag per field dedups in one pass.
        let mut seen = vec![false; self.metadata.len()];
        indices.retain(|&index| !core::mem::replace(&mut seen[index], true));

        if indices.is_empty() {
            log::warn!("`ObjectMapper::select` called without field names, modifiers are ignored");
        }

        Selection {
            mapper: self,
            indices,
        }
    }

    /// Returns the metadata declared so far for `name`.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.metadata.get(name)
    }

    /// Returns a snapshot of the declared metadata.
    ///
    /// Does not change the builder; calling it twice yields equal results.
    #[inline]
    pub fn metadata(&self) -> ObjectMetadata {
        self.metadata.clone()
    }

    /// Consumes the builder, returning the declared metadata.
    #[inline]
    pub fn into_metadata(self) -> ObjectMetadata {
        self.metadata
    }
}

// -----------------------------------------------------------------------------
// Selection

/// The active field group of an [`ObjectMapper`].
///
/// Type selectors follow last-writer-wins. Rule setters replace an earlier
/// rule of the same kind.
#[derive(Debug)]
pub struct Selection<'a> {
    mapper: &'a mut ObjectMapper,
    indices: Vec<usize>,
}

impl<'a> Selection<'a> {
    /// Ends this group and selects the next one.
    #[inline]
    pub fn select<I, S>(self, names: I) -> Selection<'a>
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        self.mapper.select(names)
    }

    /// Iterates over the selected field names, in selection order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.indices
            .iter()
            .map(|&index| self.mapper.metadata.name_at(index))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn each(self, mut f: impl FnMut(&mut FieldMetadata)) -> Self {
        for &index in &self.indices {
            f(self.mapper.metadata.get_index_mut(index));
        }
        self
    }

    fn with_type(self, value_type: ValueType) -> Self {
        self.each(|field| field.value_type = Some(value_type.clone()))
    }

    // -------------------------------------------------------------------------
    // Type selectors

    pub fn as_array(self) -> Self {
        self.with_type(ValueType::List)
    }

    pub fn as_boolean(self) -> Self {
        self.with_type(ValueType::Boolean)
    }

    pub fn as_string(self) -> Self {
        self.with_type(ValueType::String)
    }

    pub fn as_temporal(self) -> Self {
        self.with_type(ValueType::Temporal)
    }

    pub fn as_float(self) -> Self {
        self.with_type(ValueType::Float)
    }

    /// Same as [`as_float`](Self::as_float).
    pub fn as_double(self) -> Self {
        self.as_float()
    }

    pub fn as_integer(self) -> Self {
        self.with_type(ValueType::Integer)
    }

    /// Tags the fields with the opaque array-like container type.
    pub fn as_container(self) -> Self {
        self.with_type(ValueType::Container)
    }

    /// Accepts instances of `T` and of types declaring `T` as an ancestor.
    pub fn as_instance<T: TypePath>(self) -> Self {
        self.with_type(ValueType::Instance(Cow::Borrowed(T::type_path())))
    }

    /// Like [`as_instance`](Self::as_instance), naming the type by path.
    pub fn as_instance_path(self, type_path: impl Into<Cow<'static, str>>) -> Self {
        self.with_type(ValueType::Instance(type_path.into()))
    }

    // -------------------------------------------------------------------------
    // Behavior

    /// Assembly skips these fields and disassembly leaves them out.
    pub fn ignore(self) -> Self {
        self.each(|field| field.ignore = true)
    }

    /// Sets custom transforms, see [`Projection`].
    pub fn projection<A, D>(self, assembler: A, disassembler: D) -> Self
    where
        A: Fn(&RawMap, &str) -> Value + Send + Sync + 'static,
        D: Fn(&RawMap, &str) -> Value + Send + Sync + 'static,
    {
        let projection = Projection::new(assembler, disassembler);
        self.each(|field| field.projection = Some(projection.clone()))
    }

    // -------------------------------------------------------------------------
    // Rules

    /// Adds `rule`, replacing an earlier rule of the same kind.
    pub fn rule(self, rule: Rule) -> Self {
        self.each(|field| {
            field.rules.insert(rule.clone());
        })
    }

    pub fn not_empty(self) -> Self {
        self.rule(Rule::NotEmpty)
    }

    pub fn between(self, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        self.rule(Rule::Between {
            min: min.into(),
            max: max.into(),
        })
    }

    pub fn email(self) -> Self {
        self.rule(Rule::Email)
    }

    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.rule(Rule::StartsWith(prefix.into()))
    }

    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.rule(Rule::EndsWith(suffix.into()))
    }

    pub fn equals(self, value: impl Into<Value>) -> Self {
        self.rule(Rule::Equals(value.into()))
    }

    pub fn not_equals(self, value: impl Into<Value>) -> Self {
        self.rule(Rule::NotEquals(value.into()))
    }

    pub fn file(self) -> Self {
        self.rule(Rule::File)
    }

    pub fn url(self) -> Self {
        self.rule(Rule::Url)
    }

    /// The value must equal one of `values`.
    pub fn one_of<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rule(Rule::In(values.into_iter().map(Into::into).collect()))
    }

    /// The value must equal none of `values`.
    pub fn not_one_of<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rule(Rule::NotIn(values.into_iter().map(Into::into).collect()))
    }

    pub fn length(self, min: usize, max: usize) -> Self {
        self.rule(Rule::Length { min, max })
    }

    pub fn max(self, max: impl Into<f64>) -> Self {
        self.rule(Rule::Max(max.into()))
    }

    pub fn min(self, min: impl Into<f64>) -> Self {
        self.rule(Rule::Min(min.into()))
    }

    pub fn regex(self, pattern: &str) -> Self {
        self.rule(Rule::Regex(Pattern::new(pattern)))
    }
}

// -----------------------------------------------------------------------------
// Tests
