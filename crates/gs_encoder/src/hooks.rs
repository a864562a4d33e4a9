//! Capabilities a type may provide to override schema derivation.
//!
//! A type opts in by implementing the trait and listing it on the derive:
//!
//! ```
//! use gs_encoder::{Encoder, hooks::TypeProvider};
//! use gs_reflect::derive::Record;
//! use gs_schema::{Scalar, SchemaType};
//!
//! #[derive(Record)]
//! #[record(TypeProvider)]
//! struct Email(String);
//!
//! impl TypeProvider for Email {
//!     fn schema_type() -> SchemaType {
//!         Scalar::Custom("Email").into()
//!     }
//! }
//!
//! #[derive(Record)]
//! struct Contact {
//!     #[graphql("!email")]
//!     email: Email,
//! }
//!
//! let mut encoder = Encoder::new();
//! let contact = encoder.struct_of::<Contact>(&[]).unwrap();
//! let email = &encoder.object(contact).unwrap().field("email").unwrap().ty;
//! assert_eq!(encoder.display(email).to_string(), "Email!");
//! ```
//!
//! The data stored in the [`TypeMeta`](gs_reflect::registry::TypeMeta) are
//! [`TypeTraitTypeProvider`] and [`TypeTraitResolver`]. For a type you do not
//! own, insert them through the encoder's registry:
//!
//! ```
//! use gs_encoder::{Encoder, hooks::{TypeProvider, TypeTraitTypeProvider}};
//! use gs_reflect::impl_opaque_record;
//! use gs_schema::{Scalar, SchemaType};
//!
//! struct Uuid([u8; 16]);
//! impl_opaque_record!(Uuid);
//!
//! impl TypeProvider for Uuid {
//!     fn schema_type() -> SchemaType {
//!         Scalar::Id.into()
//!     }
//! }
//!
//! let mut encoder = Encoder::new();
//! encoder
//!     .registry_mut()
//!     .register_type_trait::<Uuid, TypeTraitTypeProvider>();
//! ```

use std::sync::Arc;

use gs_reflect::info::Typed;
use gs_reflect::registry::FromType;
use gs_schema::{ResolveError, ResolveFn, ResolveParams, SchemaType, Value};

// -----------------------------------------------------------------------------
// TypeProvider

/// A type that supplies its own schema type.
///
/// Takes precedence over every structural mapping, even for a plain struct.
pub trait TypeProvider {
    /// Returns the schema type the implementor is exposed as.
    fn schema_type() -> SchemaType;
}

/// [`TypeTrait`](gs_reflect::registry::TypeTrait) data of [`TypeProvider`].
#[derive(Clone, Copy)]
pub struct TypeTraitTypeProvider {
    schema_type: fn() -> SchemaType,
}

impl TypeTraitTypeProvider {
    /// Calls the implementor's [`TypeProvider::schema_type`].
    #[inline]
    pub fn schema_type(&self) -> SchemaType {
        (self.schema_type)()
    }
}

impl<T: Typed + TypeProvider> FromType<T> for TypeTraitTypeProvider {
    #[inline]
    fn from_type() -> Self {
        Self {
            schema_type: T::schema_type,
        }
    }
}

// -----------------------------------------------------------------------------
// ResolverProvider

/// A type that supplies the resolver of any field holding it.
///
/// The field type is still resolved the usual way, only the resolver is
/// taken from here.
pub trait ResolverProvider {
    /// Resolves a field holding the implementor.
    fn resolve(params: ResolveParams<'_>) -> Result<Value, ResolveError>;
}

/// [`TypeTrait`](gs_reflect::registry::TypeTrait) data of [`ResolverProvider`].
#[derive(Clone, Copy)]
pub struct TypeTraitResolver {
    resolve: fn(ResolveParams<'_>) -> Result<Value, ResolveError>,
}

impl TypeTraitResolver {
    /// Calls the implementor's [`ResolverProvider::resolve`].
    #[inline]
    pub fn resolve(&self, params: ResolveParams<'_>) -> Result<Value, ResolveError> {
        (self.resolve)(params)
    }

    /// Returns the resolver as a field callback.
    pub fn resolve_fn(&self) -> ResolveFn {
        let resolve = self.resolve;
        Arc::new(resolve)
    }
}

impl<T: Typed + ResolverProvider> FromType<T> for TypeTraitResolver {
    #[inline]
    fn from_type() -> Self {
        Self {
            resolve: T::resolve,
        }
    }
}
