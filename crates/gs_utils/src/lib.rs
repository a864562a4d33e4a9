//! Shared containers for the `gs_*` crates.
//!
//! - [`hash`]: hash maps and sets with a fixed-seed hasher.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId).

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
