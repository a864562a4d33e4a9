use core::any::TypeId;

use gs_utils::TypeIdMap;
use gs_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::TypeHandle;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of described types.
///
/// [Registering] a type stores its [`TypeMeta`], built by the type's
/// [`GetTypeMeta`] implementation, and indexes it by type path and type name.
///
/// # Example
///
/// ```
/// use gs_reflect::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
///
/// let meta = registry.get_with_type_name("String").unwrap();
/// assert_eq!(meta.type_path(), "alloc::string::String");
/// ```
///
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create an empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Create a type registry with default registrations for primitive types.
    ///
    /// - `bool`
    /// - `i8 - i128` `isize`
    /// - `u8 - u128` `usize`
    /// - `f32` `f64`
    /// - `String`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    // The type must not already exist.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        type_path_to_id.insert(ty.path(), ty.id());
    }

    // Returns `true` if the meta was inserted.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        })
    }

    /// Attempts to register the type `T` if it has not yet been registered.
    ///
    /// This also registers the dependencies named by
    /// [`GetTypeMeta::register_dependencies`], which for derived records are
    /// the types of all tagged fields.
    ///
    /// # Example
    ///
    /// ```
    /// # use core::any::TypeId;
    /// # use gs_reflect::{derive::Record, registry::TypeRegistry};
    /// #[derive(Record)]
    /// struct Foo {
    ///     #[graphql("name")]
    ///     name: Option<String>,
    ///     #[graphql("value")]
    ///     value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<Foo>();
    ///
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// assert!(registry.contains(TypeId::of::<Option<String>>()));
    /// assert!(registry.contains(TypeId::of::<i32>()));
    /// ```
    pub fn register<T: GetTypeMeta + ?Sized>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Returns the [`TypeMeta`] of the handle's target, registering it first
    /// if needed.
    ///
    /// Unlike [`register`](Self::register), this never walks dependencies,
    /// so it can be called while descending into recursive types.
    pub fn get_or_register(&mut self, handle: &TypeHandle) -> &TypeMeta {
        let Self {
            type_meta_table,
            type_path_to_id,
            type_name_to_id,
            ambiguous_names,
        } = self;

        type_meta_table.get_or_insert(handle.ty_id(), || {
            let meta = handle.type_meta();
            Self::add_new_type_indices(&meta, type_path_to_id, type_name_to_id, ambiguous_names);
            meta
        })
    }

    /// Registers the type trait `D` for type `T`.
    ///
    /// Use this to attach a capability to a type you do not own, or one that
    /// was derived without it. `T` is registered first when needed.
    ///
    /// # Example
    ///
    /// ```
    /// use gs_reflect::info::Typed;
    /// use gs_reflect::registry::{FromType, TypeRegistry};
    ///
    /// #[derive(Clone)]
    /// struct TypeTraitMarker;
    ///
    /// impl<T: Typed> FromType<T> for TypeTraitMarker {
    ///     fn from_type() -> Self { TypeTraitMarker }
    /// }
    ///
    /// let mut registry = TypeRegistry::new();
    /// registry.register_type_trait::<Option<String>, TypeTraitMarker>();
    ///
    /// let meta = registry.get_with_type_name("Option<String>").unwrap();
    /// assert!(meta.has_trait::<TypeTraitMarker>());
    /// ```
    pub fn register_type_trait<T, D>(&mut self)
    where
        T: GetTypeMeta + ?Sized,
        D: TypeTrait + FromType<T>,
    {
        self.register::<T>();
        if let Some(type_meta) = self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            type_meta.insert_trait(D::from_type());
        }
    }

    /// Inserts a prebuilt [`TypeTrait`] for an already registered type.
    ///
    /// Returns `false` if the type is not registered.
    pub fn insert_type_trait<D: TypeTrait>(&mut self, type_id: TypeId, data: D) -> bool {
        match self.type_meta_table.get_mut(&type_id) {
            Some(type_meta) => {
                type_meta.insert_trait(data);
                true
            }
            None => false,
        }
    }

    /// Whether the type with the given [`TypeId`] has been registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Returns the [`TypeMeta`] of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns the mutable [`TypeMeta`] of the type with the given [`TypeId`].
    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    /// Returns the [`TypeMeta`] of the type with the given [type path].
    ///
    /// [type path]: crate::info::TypePath::type_path
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the [`TypeMeta`] of the type with the given [type name].
    ///
    /// Returns `None` when the name is ambiguous.
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if the given [type name] matches multiple registered types.
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the [`TypeTrait`] `T` of the type with the given [`TypeId`].
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    /// Returns an iterator over the registered [`TypeMeta`]s.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Returns the registered types carrying the [`TypeTrait`] `T`.
    pub fn iter_with_trait<T: TypeTrait>(&self) -> impl Iterator<Item = (&TypeMeta, &T)> {
        self.type_meta_table
            .values()
            .filter_map(|item| item.get_trait::<T>().map(|t| (item, t)))
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
#[allow(dead_code)]
mod tests {
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::info::TypeHandle;

    mod a {
        #[derive(crate::derive::Record)]
        pub struct Item {
            #[graphql("id")]
            pub id: u32,
        }
    }

    mod b {
        #[derive(crate::derive::Record)]
        pub struct Item {
            #[graphql("children")]
            pub children: Vec<Item>,
        }
    }

    #[test]
    fn same_name_is_ambiguous() {
        let mut registry = TypeRegistry::empty();
        registry.register::<a::Item>();
        registry.register::<b::Item>();

        assert!(registry.is_ambiguous("Item"));
        assert!(registry.get_with_type_name("Item").is_none());

        let path = <b::Item as crate::info::TypePath>::type_path();
        assert!(registry.get_with_type_path(path).is_some());
    }

    #[test]
    fn recursive_dependencies_terminate() {
        let mut registry = TypeRegistry::empty();
        registry.register::<b::Item>();

        assert!(registry.contains(TypeId::of::<b::Item>()));
        assert!(registry.contains(TypeId::of::<Vec<b::Item>>()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn get_or_register_skips_dependencies() {
        let mut registry = TypeRegistry::empty();
        let meta = registry.get_or_register(&TypeHandle::of::<a::Item>());
        assert_eq!(meta.type_name(), "Item");

        assert!(registry.contains(TypeId::of::<a::Item>()));
        assert!(!registry.contains(TypeId::of::<u32>()));

        registry.get_or_register(&TypeHandle::of::<a::Item>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn insert_type_trait_needs_registration() {
        #[derive(Clone)]
        struct Flag;

        let mut registry = TypeRegistry::empty();
        assert!(!registry.insert_type_trait(TypeId::of::<u8>(), Flag));

        registry.register::<u8>();
        assert!(registry.insert_type_trait(TypeId::of::<u8>(), Flag));
        assert!(registry.get_type_trait::<Flag>(TypeId::of::<u8>()).is_some());
    }
}
