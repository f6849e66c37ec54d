#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use om_object as object;
pub use om_utils as utils;

/// Most commonly used items, for glob import.
pub mod prelude {
    pub use om_object::derive::Object;
    pub use om_object::mapper::ObjectMapper;
    pub use om_object::value::{ArrayObject, ObjectRef, RawMap, Value};
    pub use om_object::{Assemble, AssembleConfig, AssembleError, Object, ValidationMode};
}
