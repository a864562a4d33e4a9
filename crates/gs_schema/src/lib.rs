//! The schema object model produced by the encoder.
//!
//! ## Menu
//!
//! - [`Scalar`]: built-in and custom leaf types.
//! - [`SchemaType`]: a type reference, one of scalar, list-of, non-null or object.
//! - [`ObjectType`]: a named output object with an ordered [`FieldMap`].
//! - [`Field`] / [`Argument`]: field and argument descriptors.
//! - [`SchemaArena`]: the store owning every [`ObjectType`], addressed by [`ObjectId`].
//! - [`ResolveFn`]: the field-resolution callback signature.
//!
//! Objects are referenced by handle rather than by value, so a type graph
//! may contain cycles (`User.friends: [User]`) without any reference counting.

// -----------------------------------------------------------------------------
// Modules

mod arena;
mod field;
mod object;
mod ordered;
mod resolve;
mod scalar;
mod ty;

// -----------------------------------------------------------------------------
// Exports

pub use arena::{SchemaArena, TypeDisplay};
pub use field::{Argument, ArgumentMap, Field, FieldMap};
pub use object::{ObjectId, ObjectType};
pub use ordered::OrderedMap;
pub use resolve::{ResolveError, ResolveFn, ResolveParams, Value};
pub use scalar::Scalar;
pub use ty::SchemaType;
