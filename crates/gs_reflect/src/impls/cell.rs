//! Containers for static storage of type information.
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`] for the [`TypeInfo`] of a
//!   non-generic type.
//! - [`GenericTypeInfoCell`] / [`GenericTypePathCell`]: a `static CELL`
//!   inside a generic function is shared by every instantiation, so these
//!   store one entry per [`TypeId`] behind a [`RwLock`].

use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use gs_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Container for static storage of non-generic type information.
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Container for the [`TypeInfo`] of a non-generic type.
///
/// See [`Typed`](crate::info::Typed) for an example.
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, generating it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of type information with generics.
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Container for the [`TypeInfo`] of a generic type.
///
/// ```
/// use gs_reflect::impls::GenericTypeInfoCell;
/// use gs_reflect::info::{NamedField, StructInfo, TypeInfo, TypePath, Typed};
/// use gs_reflect::registry::GetTypeMeta;
///
/// struct Page<T>(Vec<T>);
///
/// impl<T: TypePath> TypePath for Page<T> {
///     fn type_path() -> &'static str { "demo::Page" }
///     fn type_name() -> &'static str { "Page" }
/// }
///
/// impl<T: GetTypeMeta> Typed for Page<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Struct(StructInfo::new::<Self>(&[
///             NamedField::tagged::<Vec<T>>("items", "!items"),
///         ])))
///     }
/// }
///
/// let info = <Page<u8>>::type_info().as_struct().unwrap();
/// let items = info.field("items").unwrap().type_info().unwrap();
/// assert_eq!(items.type_path(), "alloc::vec::Vec<u8>");
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for the type path strings of a generic type.
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, generating it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::GenericTypePathCell;

    fn path_of<T: 'static>(name: &str) -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<T>(|| name.to_owned())
    }

    #[test]
    fn generic_cell_keeps_one_entry_per_type() {
        assert_eq!(path_of::<u8>("first"), "first");
        assert_eq!(path_of::<u8>("second"), "first");
        assert_eq!(path_of::<u16>("third"), "third");
    }
}
