use crate::info::{Type, TypeHandle, TypePath};
use crate::registry::GetTypeMeta;

// -----------------------------------------------------------------------------
// ListInfo

/// A container for growable sequence info, e.g. `Vec<T>`.
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item: TypeHandle,
}

impl ListInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`ListInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized, Item: GetTypeMeta + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            item: TypeHandle::of::<Item>(),
        }
    }

    /// Returns the item type.
    #[inline]
    pub const fn item(&self) -> &TypeHandle {
        &self.item
    }
}

// -----------------------------------------------------------------------------
// ArrayInfo

/// A container for fixed-size array info, e.g. `[T; N]`.
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item: TypeHandle,
    capacity: usize,
}

impl ArrayInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`ArrayInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized, Item: GetTypeMeta>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<T>(),
            item: TypeHandle::of::<Item>(),
            capacity,
        }
    }

    /// Returns the item type.
    #[inline]
    pub const fn item(&self) -> &TypeHandle {
        &self.item
    }

    /// Returns the fixed length.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

// -----------------------------------------------------------------------------
// PointerInfo

/// A container for indirection info: `Box<T>`, `Rc<T>`, `Arc<T>`,
/// `&'static T` and `Option<T>`.
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee: TypeHandle,
    nullable: bool,
}

impl PointerInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`PointerInfo`] for a pointer that is never empty.
    #[inline]
    pub const fn new<T: TypePath + ?Sized, Pointee: GetTypeMeta + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            pointee: TypeHandle::of::<Pointee>(),
            nullable: false,
        }
    }

    /// Creates a new [`PointerInfo`] for a pointer that may be empty.
    #[inline]
    pub const fn nullable<T: TypePath + ?Sized, Pointee: GetTypeMeta + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            pointee: TypeHandle::of::<Pointee>(),
            nullable: true,
        }
    }

    /// Returns the pointed-to type.
    #[inline]
    pub const fn pointee(&self) -> &TypeHandle {
        &self.pointee
    }

    /// Returns `true` for `Option<T>`.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}

// -----------------------------------------------------------------------------
// MapInfo

/// A container for key/value map info.
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key: TypeHandle,
    value: TypeHandle,
}

impl MapInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized, K: GetTypeMeta, V: GetTypeMeta>() -> Self {
        Self {
            ty: Type::of::<T>(),
            key: TypeHandle::of::<K>(),
            value: TypeHandle::of::<V>(),
        }
    }

    /// Returns the key type.
    #[inline]
    pub const fn key(&self) -> &TypeHandle {
        &self.key
    }

    /// Returns the value type.
    #[inline]
    pub const fn value(&self) -> &TypeHandle {
        &self.value
    }
}

// -----------------------------------------------------------------------------
// OpaqueInfo

/// A container for types whose internals are not visible.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}

// -----------------------------------------------------------------------------
// DynamicInfo

/// A container for trait object info, e.g. `dyn Any`.
#[derive(Clone, Debug)]
pub struct DynamicInfo {
    ty: Type,
}

impl DynamicInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`DynamicInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
