use core::fmt;

use crate::info::{Type, TypeInfo};
use crate::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// TypeHandle

/// A link from a field or container to the type it holds.
///
/// The target's [`TypeInfo`] and [`TypeMeta`] are produced on demand through
/// function pointers, so linking a type to itself (`Vec<Self>`) never
/// recurses during construction.
#[derive(Clone, Copy)]
pub struct TypeHandle {
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    type_meta: fn() -> TypeMeta,
}

impl TypeHandle {
    /// Creates a handle to `T`.
    #[inline]
    pub const fn of<T: GetTypeMeta + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            type_info: T::type_info,
            type_meta: T::get_type_meta,
        }
    }

    crate::info::impl_type_fn!(ty);

    /// Returns the target's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Builds a fresh [`TypeMeta`] for the target.
    ///
    /// Prefer [`TypeRegistry::get_or_register`](crate::registry::TypeRegistry::get_or_register),
    /// which builds it once.
    #[inline]
    pub fn type_meta(&self) -> TypeMeta {
        (self.type_meta)()
    }

    /// Follows pointer links until a non-pointer target is reached.
    ///
    /// The handle-level counterpart of [`TypeInfo::deref_pointers`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gs_reflect::info::TypeHandle;
    ///
    /// let handle = TypeHandle::of::<Option<Box<String>>>().deref_pointers();
    /// assert!(handle.type_is::<String>());
    /// ```
    pub fn deref_pointers(&self) -> TypeHandle {
        let mut handle = *self;
        while let TypeInfo::Pointer(pointer) = handle.type_info() {
            handle = *pointer.pointee();
        }
        handle
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeHandle").field(&self.ty).finish()
    }
}
