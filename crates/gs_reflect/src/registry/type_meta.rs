use core::any::TypeId;
use core::ops::Deref;

use gs_utils::TypeIdMap;

use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime storage for type metadata, registered into the [`TypeRegistry`].
///
/// This includes a [`TypeInfo`] and a [`TypeTrait`] table.
///
/// A `TypeMeta` is usually produced by [`GetTypeMeta`], which
/// [`#[derive(Record)]`](crate::derive::Record) implements.
pub struct TypeMeta {
    ty: &'static Type,
    type_info: &'static TypeInfo,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// Create an empty [`TypeMeta`] from a type.
    #[inline]
    pub fn of<T: Typed + ?Sized>() -> Self {
        let type_info = T::type_info();
        Self {
            ty: type_info.ty(),
            type_info,
            trait_table: TypeIdMap::new(),
        }
    }

    /// Create an empty [`TypeMeta`] from a type with capacity.
    #[inline]
    pub fn with_capacity<T: Typed + ?Sized>(capacity: usize) -> Self {
        let type_info = T::type_info();
        Self {
            ty: type_info.ty(),
            type_info,
            trait_table: TypeIdMap::with_capacity(capacity),
        }
    }

    /// Returns the [`TypeInfo`].
    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    /// Returns the [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &'static Type {
        self.ty
    }

    /// Returns the type path.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns the type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty.name()
    }

    /// Insert a new [`TypeTrait`], replacing one of the same type.
    #[inline(always)]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.insert_trait_by_id(TypeId::of::<T>(), Box::new(data));
    }

    #[inline(never)]
    fn insert_trait_by_id(&mut self, id: TypeId, val: Box<dyn TypeTrait>) {
        self.trait_table.insert(id, val);
    }

    /// Get a [`TypeTrait`] reference, or return `None` if it doesn't exist.
    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.get_trait_by_id(TypeId::of::<T>())
            .and_then(<dyn TypeTrait>::downcast_ref)
    }

    /// Get a [`TypeTrait`] reference, or return `None` if it doesn't exist.
    pub fn get_trait_by_id(&self, type_id: TypeId) -> Option<&dyn TypeTrait> {
        self.trait_table.get(&type_id).map(Deref::deref)
    }

    /// Return true if the specific [`TypeTrait`] exists.
    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains(&TypeId::of::<T>())
    }

    /// Return the number of [`TypeTrait`]s.
    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }
}

impl Clone for TypeMeta {
    fn clone(&self) -> Self {
        let mut trait_table = TypeIdMap::with_capacity(self.trait_len());
        for (id, type_trait) in self.trait_table.iter() {
            trait_table.insert(*id, (**type_trait).clone_type_trait());
        }

        Self {
            ty: self.ty,
            type_info: self.type_info,
            trait_table,
        }
    }
}

impl core::fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeMeta")
            .field("ty", &self.ty)
            .field("trait_len", &self.trait_len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// A trait which allows a type to generate its [`TypeMeta`]
/// for registration into the [`TypeRegistry`].
///
/// Implemented by [`#[derive(Record)]`](crate::derive::Record), which also
/// inserts every capability listed in `#[record(...)]`.
///
/// # Manually
///
/// ```
/// use gs_reflect::derive::Record;
/// use gs_reflect::registry::{FromType, GetTypeMeta, TypeMeta};
/// use gs_reflect::info::Typed;
///
/// #[derive(Clone)]
/// struct TypeTraitMarker;
///
/// impl<T: Typed> FromType<T> for TypeTraitMarker {
///     fn from_type() -> Self { TypeTraitMarker }
/// }
///
/// #[derive(Record)]
/// struct A {
///     #[graphql("a")]
///     a: i32,
/// }
///
/// let mut meta = A::get_type_meta();
/// assert!(!meta.has_trait::<TypeTraitMarker>());
///
/// meta.insert_trait::<TypeTraitMarker>(FromType::<A>::from_type());
/// assert!(meta.has_trait::<TypeTraitMarker>());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GetTypeMeta` so cannot be used as a record field",
    note = "consider annotating `{Self}` with `#[derive(Record)]` or using `impl_opaque_record!`"
)]
pub trait GetTypeMeta: Typed {
    /// Returns the **default** [`TypeMeta`] for this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers other types needed by this type.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
