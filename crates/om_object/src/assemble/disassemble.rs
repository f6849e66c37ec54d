use crate::assemble::format_temporal;
use crate::info::ObjectInfo;
use crate::mapper::ObjectMetadata;
use crate::value::{RawMap, Value};
use crate::Object;

/// Undoes the built-in object casts: temporal values become strings in
/// `temporal_format`, containers become lists.
pub fn to_plain(value: Value, temporal_format: &str) -> Value {
    match value {
        Value::Temporal(temporal) => Value::String(format_temporal(&temporal, temporal_format)),
        Value::Container(container) => Value::List(container.into_inner()),
        other => other,
    }
}

/// Reads `object` back into a plain mapping.
///
/// Fields follow declaration order and are restricted to `filter` when it is
/// not empty. Ignored fields are left out. Disassemblers see the plain values
/// of every emitted field.
pub(crate) fn disassemble(
    object: &dyn Object,
    info: &ObjectInfo,
    metadata: &ObjectMetadata,
    filter: &[&str],
    temporal_format: &str,
) -> RawMap {
    let mut plain = RawMap::with_capacity(info.field_len());
    let mut projected: Vec<&str> = Vec::new();

    for name in info.field_names() {
        if !filter.is_empty() && !filter.contains(&name) {
            continue;
        }
        let field = metadata.get(name);
        if field.is_some_and(|field| field.is_ignored()) {
            continue;
        }
        let Some(value) = object.field_value(name) else {
            continue;
        };
        if field.is_some_and(|field| field.projection().is_some()) {
            projected.push(name);
        }
        plain.insert(name, to_plain(value, temporal_format));
    }

    if projected.is_empty() {
        return plain;
    }

    let mut out = plain.clone();
    for name in projected {
        if let Some(projection) = metadata.get(name).and_then(|field| field.projection()) {
            out.insert(name, projection.disassemble(&plain, name));
        }
    }
    out
}
