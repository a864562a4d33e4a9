//! Items used by generated code. Not public API.

pub use crate::impls::concat;

pub use ::core::module_path;
