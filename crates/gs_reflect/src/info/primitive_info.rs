use crate::info::{Type, TypePath};

/// The native primitive kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Str,
    String,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl PrimitiveKind {
    /// Returns `true` for every signed and unsigned integer width.
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::Isize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::U128
                | Self::Usize
        )
    }

    /// Returns `true` for every floating-point width.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns `true` for `str` and `String`.
    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(self, Self::Str | Self::String)
    }
}

/// A container for primitive type info.
#[derive(Clone, Debug)]
pub struct PrimitiveInfo {
    ty: Type,
    kind: PrimitiveKind,
}

impl PrimitiveInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`PrimitiveInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>(kind: PrimitiveKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the primitive kind.
    #[inline]
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }
}
