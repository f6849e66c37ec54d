use core::fmt;
use std::sync::Arc;

use om_utils::hash::HashMap;

use crate::mapper::{Rules, ValueType};
use crate::value::{RawMap, Value};

// -----------------------------------------------------------------------------
// Projection

/// The callable shape of both projection directions.
///
/// Receives the whole mapping and the key being processed.
pub type ProjectionFn = dyn Fn(&RawMap, &str) -> Value + Send + Sync;

/// A pair of custom transforms for one field.
///
/// - `assembler` runs before the type cast during assembly, receiving the
///   raw input mapping.
/// - `disassembler` runs during disassembly, receiving the plain values of
///   every emitted field.
///
/// Cloning shares the callables.
#[derive(Clone)]
pub struct Projection {
    assembler: Arc<ProjectionFn>,
    disassembler: Arc<ProjectionFn>,
}

impl Projection {
    pub fn new<A, D>(assembler: A, disassembler: D) -> Self
    where
        A: Fn(&RawMap, &str) -> Value + Send + Sync + 'static,
        D: Fn(&RawMap, &str) -> Value + Send + Sync + 'static,
    {
        Self {
            assembler: Arc::new(assembler),
            disassembler: Arc::new(disassembler),
        }
    }

    #[inline]
    pub fn assemble(&self, raw: &RawMap, key: &str) -> Value {
        (self.assembler)(raw, key)
    }

    #[inline]
    pub fn disassemble(&self, plain: &RawMap, key: &str) -> Value {
        (self.disassembler)(plain, key)
    }
}

impl fmt::Debug for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection").finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// FieldMetadata

/// Everything declared about one field.
///
/// A fresh record is not ignored and has no type, no rules and no projection.
#[derive(Debug, Clone, Default)]
pub struct FieldMetadata {
    pub(crate) value_type: Option<ValueType>,
    pub(crate) ignore: bool,
    pub(crate) rules: Rules,
    pub(crate) projection: Option<Projection>,
}

impl FieldMetadata {
    /// Returns the declared type, `None` when unset.
    #[inline]
    pub fn value_type(&self) -> Option<&ValueType> {
        self.value_type.as_ref()
    }

    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.ignore
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[inline]
    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }
}

// -----------------------------------------------------------------------------
// ObjectMetadata

/// The finished field mapping of one type, in declaration order.
///
/// Produced by [`ObjectMapper`](crate::mapper::ObjectMapper) and cached per type
/// by the [`MetadataRegistry`](crate::registry::MetadataRegistry).
#[derive(Debug, Clone, Default)]
pub struct ObjectMetadata {
    names: Vec<Box<str>>,
    fields: Vec<FieldMetadata>,
    indices: HashMap<Box<str>, usize>,
}

impl ObjectMetadata {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the metadata for `name`, `None` for unmanaged fields.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&FieldMetadata> {
        self.indices.get(name).map(|&index| &self.fields[index])
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Iterates over `(name, metadata)` in order of first selection.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &FieldMetadata)> {
        self.names.iter().map(|n| &**n).zip(self.fields.iter())
    }

    #[inline]
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(|n| &**n)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the index of `name`, creating a default record first if needed.
    pub(crate) fn index_or_insert(&mut self, name: Box<str>) -> usize {
        if let Some(&index) = self.indices.get(&name) {
            return index;
        }
        let index = self.names.len();
        self.indices.insert(name.clone(), index);
        self.names.push(name);
        self.fields.push(FieldMetadata::default());
        index
    }

    #[inline]
    pub(crate) fn name_at(&self, index: usize) -> &str {
        &self.names[index]
    }

    #[inline]
    pub(crate) fn get_index_mut(&mut self, index: usize) -> &mut FieldMetadata {
        &mut self.fields[index]
    }
}
