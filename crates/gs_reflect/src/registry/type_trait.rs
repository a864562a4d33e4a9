use core::any::Any;
use core::fmt;

// -----------------------------------------------------------------------------
// TypeTrait

/// A capability stored in a [`TypeMeta`](crate::registry::TypeMeta).
///
/// Implemented for every `Clone + Send + Sync + 'static` type. A type trait
/// usually holds function pointers produced by [`FromType`], bound to the
/// concrete type it was built for.
///
/// # Examples
///
/// ```
/// use gs_reflect::info::Typed;
/// use gs_reflect::registry::{FromType, TypeMeta};
///
/// #[derive(Clone)]
/// struct TypeTraitLabel {
///     label: fn() -> &'static str,
/// }
///
/// impl<T: Typed> FromType<T> for TypeTraitLabel {
///     fn from_type() -> Self {
///         Self { label: T::type_name }
///     }
/// }
///
/// let mut meta = TypeMeta::of::<u32>();
/// meta.insert_trait::<TypeTraitLabel>(FromType::<u32>::from_type());
///
/// let label = meta.get_trait::<TypeTraitLabel>().unwrap();
/// assert_eq!((label.label)(), "u32");
/// ```
///
/// [`FromType`]: crate::registry::FromType
pub trait TypeTrait: Any + Send + Sync {
    /// Clones the trait object into a new box.
    fn clone_type_trait(&self) -> Box<dyn TypeTrait>;
}

impl<T: Clone + Any + Send + Sync> TypeTrait for T {
    #[inline]
    fn clone_type_trait(&self) -> Box<dyn TypeTrait> {
        Box::new(self.clone())
    }
}

impl dyn TypeTrait {
    /// Returns `true` if the boxed capability is a `T`.
    #[inline]
    pub fn is<T: TypeTrait>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Downcasts to a concrete capability.
    #[inline]
    pub fn downcast_ref<T: TypeTrait>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref()
    }
}

impl fmt::Debug for dyn TypeTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TypeTrait")
    }
}
