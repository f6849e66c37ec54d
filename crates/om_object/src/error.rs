use thiserror::Error;

use crate::FieldError;
use crate::validate::RuleViolation;
use crate::value::ValueKind;

// -----------------------------------------------------------------------------
// MappingError

/// A type could not provide its field mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MappingError {
    /// The type did not override
    /// [`Assemble::declare_mapping`](crate::Assemble::declare_mapping).
    #[error("`{type_path}` does not declare a field mapping")]
    Unimplemented { type_path: &'static str },
}

// -----------------------------------------------------------------------------
// AssembleError

/// An assembly or disassembly call failed.
///
/// Every variant is fatal to the call: no partially populated instance is
/// returned.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AssembleError {
    /// The value cannot be cast to the declared type.
    #[error("field `{field}` of `{type_path}`: expected {expected}, found {found}")]
    TypeMismatch {
        type_path: &'static str,
        field: Box<str>,
        expected: String,
        found: ValueKind,
    },
    /// A temporal field received a string no accepted format parses.
    #[error("field `{field}` of `{type_path}`: `{input}` is not a valid date-time")]
    InvalidTemporal {
        type_path: &'static str,
        field: Box<str>,
        input: String,
    },
    #[error(transparent)]
    Mapping(#[from] MappingError),
    /// The generated setter refused the final value.
    #[error("field `{field}` of `{type_path}` rejected the value")]
    Rejected {
        type_path: &'static str,
        field: Box<str>,
        #[source]
        source: FieldError,
    },
    /// A rule failed in [`ValidationMode::Strict`](crate::ValidationMode::Strict).
    #[error("field `{field}` of `{type_path}` failed validation")]
    Validation {
        type_path: &'static str,
        field: Box<str>,
        #[source]
        source: RuleViolation,
    },
}

impl AssembleError {
    /// Returns the field the error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { field, .. }
            | Self::InvalidTemporal { field, .. }
            | Self::Rejected { field, .. }
            | Self::Validation { field, .. } => Some(field),
            Self::Mapping(_) => None,
        }
    }
}
