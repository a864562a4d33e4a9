//! Capability lookup for described types.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: a capability a type opts into, stored as data.
//! - [`FromType`]: builds a `TypeTrait` for a concrete type.
//! - [`TypeMeta`]: a [`TypeInfo`] plus a table of `TypeTrait`s.
//! - [`GetTypeMeta`]: builds the default `TypeMeta` of a type.
//! - [`TypeRegistry`]: stores `TypeMeta`s by `TypeId`, type path and type name.
//!
//! A type opts into a capability by listing the capability's `TypeTrait` in
//! `#[record(...)]`, or later through [`TypeRegistry::register_type_trait`].
//! Consumers ask for the capability with [`TypeMeta::get_trait`], which
//! replaces any runtime "does this value implement X" check.
//!
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
pub use type_trait::TypeTrait;
