//! The assembly engine.
//!
//! - [`Assemble`]: the contract a hydratable type implements.
//! - [`Assembler`]: the engine, bound to a [`MetadataRegistry`] and an
//!   [`AssembleConfig`].
//! - [`cast`]: the type-cast step on its own.
//!
//! ## Pipeline
//!
//! For each `(key, value)` of the input, in insertion order:
//!
//! 1. skip the key if the type has no such field, or it is declared `ignore`;
//! 2. assign the raw value directly if the field has no metadata;
//! 3. replace the value with the projection's assembler output, if any;
//! 4. cast it to the declared type;
//! 5. check the rules, in [`ValidationMode::Strict`] only;
//! 6. assign it through the field setter.
//!
//! The first error aborts the call and no instance is returned.

// -----------------------------------------------------------------------------
// Modules

mod cast;
mod disassemble;
mod temporal;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use cast::{CastError, cast};
pub use disassemble::to_plain;
pub use temporal::{DEFAULT_TEMPORAL_FORMAT, format_temporal, parse_temporal};

use crate::error::{AssembleError, MappingError};
use crate::info::Typed;
use crate::mapper::ObjectMapper;
use crate::registry::MetadataRegistry;
use crate::validate::validate;
use crate::value::{RawMap, Value};
use crate::Object;

// -----------------------------------------------------------------------------
// Assemble

/// A type that can be built from, and read back into, a [`RawMap`].
///
/// The only required piece is [`declare_mapping`](Self::declare_mapping);
/// the rest has working defaults backed by the global
/// [`MetadataRegistry`] and [`AssembleConfig::default`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDateTime;
/// use om_object::derive::Object;
/// use om_object::mapper::ObjectMapper;
/// use om_object::value::Value;
/// use om_object::{Assemble, MappingError, raw_map};
///
/// #[derive(Object, Default)]
/// struct Post {
///     id: i64,
///     title: Option<String>,
///     published_at: Option<NaiveDateTime>,
/// }
///
/// impl Assemble for Post {
///     fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
///         m.select(["id"]).as_integer()
///             .select(["title"]).as_string()
///             .select(["published_at"]).as_temporal();
///         Ok(())
///     }
/// }
///
/// let post = Post::assemble(&raw_map! {
///     "id" => "7",
///     "title" => "Hello",
///     "published_at" => "2024-03-01 09:00:00",
/// }).unwrap();
///
/// let raw = post.to_raw().unwrap();
/// assert_eq!(raw.get("id"), Some(&Value::Int(7)));
/// assert_eq!(raw.get("published_at"), Some(&Value::from("2024-03-01 09:00:00")));
/// ```
pub trait Assemble: Object + Typed + Default {
    /// Declares how the fields of this type are cast, projected and validated.
    ///
    /// Called at most once per type and registry; the result is cached.
    ///
    /// # Errors
    ///
    /// The default body returns [`MappingError::Unimplemented`], so assembly
    /// of a type without a declaration fails instead of silently doing nothing.
    fn declare_mapping(mapper: &mut ObjectMapper) -> Result<(), MappingError> {
        let _ = mapper;
        Err(MappingError::Unimplemented {
            type_path: Self::type_path(),
        })
    }

    /// The format temporal fields are parsed with first and written back in.
    #[inline]
    fn temporal_format() -> &'static str {
        DEFAULT_TEMPORAL_FORMAT
    }

    /// Builds an instance from `raw`, see [`Assembler::assemble`].
    #[inline]
    fn assemble(raw: &RawMap) -> Result<Self, AssembleError> {
        Assembler::new().assemble(raw)
    }

    /// Reads the fields named in `filter` (all when empty) into a plain
    /// mapping, see [`Assembler::disassemble`].
    #[inline]
    fn disassemble(&self, filter: &[&str]) -> Result<RawMap, AssembleError> {
        Assembler::new().disassemble(self, filter)
    }

    /// Reads every field into a plain mapping.
    #[inline]
    fn to_raw(&self) -> Result<RawMap, AssembleError> {
        self.disassemble(&[])
    }
}

// -----------------------------------------------------------------------------
// AssembleConfig

/// Whether declared rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Rules are stored but never checked.
    #[default]
    Permissive,
    /// Rules are checked after casting; the first violation aborts the call.
    Strict,
}

/// Runtime options of an [`Assembler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct AssembleConfig {
    pub validation: ValidationMode,
}

impl AssembleConfig {
    /// The default config with rules enforced.
    #[inline]
    pub const fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
        }
    }
}

// -----------------------------------------------------------------------------
// Assembler

/// The assembly engine.
///
/// Cheap to create. [`Assembler::new`] uses the global registry and the
/// default config; the builder methods select others.
///
/// # Examples
///
/// ```
/// use om_object::derive::Object;
/// use om_object::mapper::ObjectMapper;
/// use om_object::registry::MetadataRegistry;
/// use om_object::{Assemble, AssembleConfig, AssembleError, Assembler, MappingError, raw_map};
///
/// #[derive(Object, Default)]
/// struct Signup {
///     email: Option<String>,
/// }
///
/// impl Assemble for Signup {
///     fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
///         m.select(["email"]).as_string().email();
///         Ok(())
///     }
/// }
///
/// let raw = raw_map! { "email" => "not an address" };
///
/// // Rules are inert by default.
/// assert!(Signup::assemble(&raw).is_ok());
///
/// let registry = MetadataRegistry::new();
/// let strict = Assembler::with_registry(&registry).with_config(AssembleConfig::strict());
/// assert!(matches!(
///     strict.assemble::<Signup>(&raw),
///     Err(AssembleError::Validation { .. }),
/// ));
/// ```
#[derive(Clone, Copy)]
pub struct Assembler<'r> {
    registry: &'r MetadataRegistry,
    config: AssembleConfig,
}

impl Assembler<'static> {
    /// An engine on the [global](MetadataRegistry::global) registry.
    #[inline]
    pub fn new() -> Self {
        Self::with_registry(MetadataRegistry::global())
    }
}

impl Default for Assembler<'static> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Assembler<'r> {
    /// An engine on `registry`.
    #[inline]
    pub fn with_registry(registry: &'r MetadataRegistry) -> Self {
        Self {
            registry,
            config: AssembleConfig::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: AssembleConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &AssembleConfig {
        &self.config
    }

    #[inline]
    pub fn registry(&self) -> &'r MetadataRegistry {
        self.registry
    }

    /// Builds a `T` from `raw`, starting from `T::default()`.
    ///
    /// # Errors
    ///
    /// - [`AssembleError::Mapping`] if `T` has no usable mapping.
    /// - [`AssembleError::TypeMismatch`] or [`AssembleError::InvalidTemporal`]
    ///   if a value cannot be cast.
    /// - [`AssembleError::Validation`] if a rule fails in strict mode.
    /// - [`AssembleError::Rejected`] if a field setter refuses a value.
    pub fn assemble<T: Assemble>(&self, raw: &RawMap) -> Result<T, AssembleError> {
        let info = T::object_info();
        let metadata = self.registry.get::<T>()?;
        let type_path = T::type_path();
        let mut target = T::default();

        for (key, value) in raw.iter() {
            if !info.has_field(key) {
                log::trace!("`{type_path}`: no field `{key}`, skipped");
                continue;
            }

            let Some(field) = metadata.get(key) else {
                log::trace!("`{type_path}`: field `{key}` is unmanaged, assigned as is");
                set_field(&mut target, type_path, key, value.clone())?;
                continue;
            };

            if field.is_ignored() {
                log::trace!("`{type_path}`: field `{key}` is ignored");
                continue;
            }

            let value = match field.projection() {
                Some(projection) => projection.assemble(raw, key),
                None => value.clone(),
            };

            let value = cast(value, field.value_type(), T::temporal_format())
                .map_err(|err| err.at(type_path, key))?;

            #[cfg(all(debug_assertions, feature = "debug"))]
            log::trace!("`{type_path}`: field `{key}` cast to {value:?}");

            if self.config.validation == ValidationMode::Strict {
                validate(&value, field.rules()).map_err(|source| AssembleError::Validation {
                    type_path,
                    field: key.into(),
                    source,
                })?;
            }

            set_field(&mut target, type_path, key, value)?;
        }

        Ok(target)
    }

    /// Reads `object` into a plain mapping.
    ///
    /// - Fields come in declaration order, restricted to `filter` unless it is
    ///   empty. Unknown names in `filter` are ignored.
    /// - Fields declared `ignore` are left out.
    /// - Temporal values become strings in `T::temporal_format()`, containers
    ///   become lists, everything else is emitted as read.
    /// - Fields with a projection are replaced by the disassembler's output,
    ///   which receives the plain values of all emitted fields.
    ///
    /// # Errors
    ///
    /// [`AssembleError::Mapping`] if `T` has no usable mapping.
    pub fn disassemble<T: Assemble>(
        &self,
        object: &T,
        filter: &[&str],
    ) -> Result<RawMap, AssembleError> {
        let metadata = self.registry.get::<T>()?;
        Ok(disassemble::disassemble(
            object,
            T::object_info(),
            &metadata,
            filter,
            T::temporal_format(),
        ))
    }
}

fn set_field<T: Object>(
    target: &mut T,
    type_path: &'static str,
    key: &str,
    value: Value,
) -> Result<(), AssembleError> {
    target
        .set_field(key, value)
        .map_err(|source| AssembleError::Rejected {
            type_path,
            field: key.into(),
            source,
        })
}
