//! Builds schema objects from record metadata.
//!
//! An [`Encoder`] walks the tagged fields of a [`Record`](gs_reflect::derive::Record)
//! type and produces an [`ObjectType`](gs_schema::ObjectType) in its
//! [`SchemaArena`](gs_schema::SchemaArena), or an
//! [`ArgumentMap`](gs_schema::ArgumentMap).
//!
//! ## Menu
//!
//! - [`Encoder`]: the object / argument / list / field builders.
//! - [`TypeCache`]: the per-encoder memo of resolved types, see [`CacheKeyPolicy`].
//! - [`FieldTag`]: the parsed `#[graphql("!name")]` attribute.
//! - [`hooks`]: [`TypeProvider`](hooks::TypeProvider) and
//!   [`ResolverProvider`](hooks::ResolverProvider), the capabilities a type may opt into.
//! - [`SchemaOption`]: post-resolution settings (description, default value, ...).
//! - [`EncodeError`]: everything that can go wrong.
//! - [`global`]: a process-wide encoder with panicking entry points.
//!
//! ## Field resolution
//!
//! For each tagged field, pointer layers (`Box`, `Option`, `Arc`, ...) are
//! stripped, then the first match wins:
//!
//! 1. the type was already resolved by this encoder;
//! 2. the type carries a [`TypeProvider`](hooks::TypeProvider);
//! 3. the type is a date/time value → `DateTime`;
//! 4. the type is a primitive → `Int`, `Float`, `String` or `Boolean`;
//! 5. the type is a struct → a nested object;
//! 6. the type is a list or array → a list of its resolved item type.
//!
//! Anything else fails with [`EncodeError::TypeNotRecognized`]. A `!` tag
//! prefix wraps the result in non-null, and a
//! [`ResolverProvider`](hooks::ResolverProvider) on the field type is
//! attached as the field resolver.
//!
//! # Examples
//!
//! ```
//! use gs_encoder::Encoder;
//! use gs_reflect::derive::Record;
//!
//! #[derive(Record)]
//! struct User {
//!     #[graphql("!id")]
//!     id: u64,
//!     #[graphql("friends")]
//!     friends: Vec<User>,
//!     password_hash: String,
//! }
//!
//! let mut encoder = Encoder::new();
//! let user = encoder.struct_of::<User>(&[]).unwrap();
//!
//! let object = encoder.object(user).unwrap();
//! assert_eq!(object.name(), "User");
//! assert_eq!(object.fields().len(), 2);
//!
//! let friends = &object.field("friends").unwrap().ty;
//! assert_eq!(encoder.display(friends).to_string(), "[User]");
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// `#[derive(Record)]` refers to hook types through `gs_encoder`.
extern crate self as gs_encoder;

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod encoder;
mod error;
mod options;
mod scalar;
mod tag;

pub mod global;
pub mod hooks;

// -----------------------------------------------------------------------------
// Exports

pub use cache::{CacheKeyPolicy, TypeCache};
pub use encoder::Encoder;
pub use error::EncodeError;
pub use options::{OptionTarget, SchemaOption};
pub use scalar::scalar_of;
pub use tag::FieldTag;
