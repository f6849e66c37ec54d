//! Per-type metadata storage.
//!
//! - [`MetadataRegistry`]: caches each type's [`ObjectMetadata`](crate::mapper::ObjectMetadata).
//!
//! ## auto_register
//!
//! See [`MetadataRegistry::auto_register`].
//!
//! We use the [`inventory`] crate for static registration. Not every
//! platform supports it; where it is missing, `auto_register` returns
//! `false` and metadata is still declared lazily on first use.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod metadata_registry;

// -----------------------------------------------------------------------------
// Exports

pub use metadata_registry::MetadataRegistry;
