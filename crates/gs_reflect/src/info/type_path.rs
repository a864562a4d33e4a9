use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Static names of a type, never prefixed by `::`.
///
/// Implemented by [`#[derive(Record)]`](crate::derive::Record), with the
/// invoking module as prefix or the path given by `#[record(type_path = "...")]`.
///
/// ```
/// use gs_reflect::info::TypePath;
///
/// struct Invoice;
///
/// impl TypePath for Invoice {
///     fn type_path() -> &'static str { "billing::Invoice" }
///     fn type_name() -> &'static str { "Invoice" }
/// }
///
/// assert_eq!(<Option<Invoice>>::type_name(), "Option<Invoice>");
/// ```
pub trait TypePath: 'static {
    /// The fully qualified path with generics, unique per type.
    ///
    /// `"core::option::Option<alloc::vec::Vec<usize>>"` for `Option<Vec<usize>>`.
    fn type_path() -> &'static str;

    /// The path without modules, two types may share it.
    ///
    /// `"Option<Vec<usize>>"` for `Option<Vec<usize>>`.
    fn type_name() -> &'static str;
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] with the names of its [`TypePath`] implementation.
///
/// Compares by `TypeId` only.
///
/// ```
/// use gs_reflect::info::Type;
///
/// let ty = Type::of::<Vec<u8>>();
/// assert!(ty.is::<Vec<u8>>());
/// assert_eq!(ty.name(), "Vec<u8>");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
    name: fn() -> &'static str,
}

impl Type {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
            name: T::type_name,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        TypeId::of::<T>() == self.id
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any + ?Sized>(&self) -> bool {
            self.$field.id() == ::core::any::TypeId::of::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.$field.name()
        }
    };
}

pub(crate) use impl_type_fn;
