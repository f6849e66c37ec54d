//! Small containers shared by the `om_*` crates.
//!
//! - [`hash`]: hash maps with a fixed-seed `foldhash` state.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId), used for per-type caches.
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
