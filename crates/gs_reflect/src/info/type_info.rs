use core::{error, fmt};

use crate::info::{ArrayInfo, DynamicInfo, ListInfo, MapInfo, OpaqueInfo, PointerInfo};
use crate::info::{PrimitiveInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The "kind" of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Primitive,
    Struct,
    List,
    Array,
    Pointer,
    Map,
    Opaque,
    Dynamic,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => f.pad("Primitive"),
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Pointer => f.pad("Pointer"),
            Self::Map => f.pad("Map"),
            Self::Opaque => f.pad("Opaque"),
            Self::Dynamic => f.pad("Dynamic"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info),
/// [`TypeHandle::type_info`](crate::info::TypeHandle::type_info) or
/// [`TypeMeta::type_info`](crate::registry::TypeMeta::type_info).
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Primitive(PrimitiveInfo),
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Pointer(PointerInfo),
    Map(MapInfo),
    Opaque(OpaqueInfo),
    Dynamic(DynamicInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    /// Returns the [`Type`] described.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Primitive(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
            Self::Dynamic(info) => info.ty(),
        }
    }

    /// Returns the [`ReflectKind`].
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Map(_) => ReflectKind::Map,
            Self::Opaque(_) => ReflectKind::Opaque,
            Self::Dynamic(_) => ReflectKind::Dynamic,
        }
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: core::any::Any + ?Sized>(&self) -> bool {
        self.ty().is::<T>()
    }

    /// Returns the type path.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Follows [`PointerInfo`] links until a non-pointer type is reached.
    ///
    /// `Option<Box<Arc<User>>>` yields the info of `User`.
    pub fn deref_pointers(&'static self) -> &'static TypeInfo {
        let mut info = self;
        while let Self::Pointer(pointer) = info {
            info = pointer.pointee().type_info();
        }
        info
    }

    impl_cast_method!(as_primitive: Primitive => PrimitiveInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);
    impl_cast_method!(as_dynamic: Dynamic => DynamicInfo);
}
