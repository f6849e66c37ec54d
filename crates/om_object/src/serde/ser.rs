use serde_core::ser::{SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};

use crate::assemble::{DEFAULT_TEMPORAL_FORMAT, format_temporal};
use crate::value::{ObjectRef, RawMap, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(list) => serialize_seq(list, serializer),
            Value::Map(map) => map.serialize(serializer),
            Value::Temporal(temporal) => {
                serializer.serialize_str(&format_temporal(temporal, DEFAULT_TEMPORAL_FORMAT))
            }
            Value::Container(container) => serialize_seq(container, serializer),
            Value::Object(object) => ObjectFields(object).serialize(serializer),
        }
    }
}

fn serialize_seq<S: Serializer>(items: &[Value], serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        state.serialize_element(item)?;
    }
    state.end()
}

impl Serialize for RawMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            state.serialize_entry(name, value)?;
        }
        state.end()
    }
}

/// A shallow map view of a user object: its fields, read through the getter.
struct ObjectFields<'a>(&'a ObjectRef);

impl Serialize for ObjectFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let info = self.0.info();
        let object = self.0.as_object();
        let mut state = serializer.serialize_map(Some(info.field_len()))?;
        for name in info.field_names() {
            if let Some(value) = object.field_value(name) {
                state.serialize_entry(name, &value)?;
            }
        }
        state.end()
    }
}
