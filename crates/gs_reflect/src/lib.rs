//! Compile-time metadata for record types.
//!
//! Rust has no runtime reflection, so every type taking part in schema
//! building describes itself through three traits:
//!
//! - [`TypePath`](info::TypePath): stable names (`type_path` is unique, `type_name` is not).
//! - [`Typed`](info::Typed): the shape of the type as a [`TypeInfo`](info::TypeInfo).
//! - [`GetTypeMeta`](registry::GetTypeMeta): the capabilities ([`TypeTrait`](registry::TypeTrait)s)
//!   the type opts into.
//!
//! All three are implemented by [`#[derive(Record)]`](derive::Record), and for
//! primitives, strings, collections and smart pointers by this crate.
//!
//! ```
//! use gs_reflect::{derive::Record, info::Typed};
//!
//! #[derive(Record)]
//! struct User {
//!     #[graphql("!id")]
//!     id: u64,
//!     #[graphql("name")]
//!     name: String,
//!     cache_key: u64,
//! }
//!
//! let info = User::type_info().as_struct().unwrap();
//! assert_eq!(info.field_len(), 3);
//! assert_eq!(info.field("id").unwrap().tag(), Some("!id"));
//! assert_eq!(info.field("cache_key").unwrap().tag(), None);
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `gs_reflect`, which must also resolve
// inside the crate itself.
extern crate self as gs_reflect;

// -----------------------------------------------------------------------------
// Modules

pub mod impls;
pub mod info;
pub mod registry;

#[doc(hidden)]
pub mod __macro_exports;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use gs_reflect_derive as derive;
