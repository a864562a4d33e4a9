use gs_reflect::info::{StructInfo, TypeHandle, TypeInfo};
use gs_reflect::registry::{GetTypeMeta, TypeRegistry};
use gs_schema::{
    Argument, ArgumentMap, Field, ObjectId, ObjectType, ResolveFn, SchemaArena, SchemaType,
    TypeDisplay,
};

use crate::hooks::{TypeTraitResolver, TypeTraitTypeProvider};
use crate::{CacheKeyPolicy, EncodeError, FieldTag, OptionTarget, SchemaOption, TypeCache};

// -----------------------------------------------------------------------------
// Encoder

/// Builds schema types from record metadata.
///
/// An encoder owns the three stores every build goes through:
///
/// - a [`TypeCache`], so each type is resolved once;
/// - a [`TypeRegistry`], where the capabilities of each met type are looked up;
/// - a [`SchemaArena`], owning the built objects.
///
/// Object handles ([`ObjectId`]) are only meaningful for the encoder that
/// returned them.
///
/// An encoder is not synchronized. Build from one thread, or guard it, as
/// [`global`](crate::global) does.
///
/// A failed object build is not rolled back: the objects it started stay in
/// the arena, partially populated. They are marked failed in the cache, so
/// any later request resolving to one of them returns the original error.
#[derive(Debug, Default)]
pub struct Encoder {
    cache: TypeCache,
    registry: TypeRegistry,
    arena: SchemaArena,
    // Objects started by the outermost object build in progress.
    building: Vec<ObjectId>,
}

impl Encoder {
    /// Creates an encoder keying its cache by qualified type path.
    #[inline]
    pub fn new() -> Self {
        Self::with_key_policy(CacheKeyPolicy::Qualified)
    }

    /// Creates an encoder with the given cache key policy.
    pub fn with_key_policy(policy: CacheKeyPolicy) -> Self {
        Self {
            cache: TypeCache::new(policy),
            registry: TypeRegistry::new(),
            arena: SchemaArena::new(),
            building: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors

    /// Returns the type cache.
    #[inline]
    pub fn cache(&self) -> &TypeCache {
        &self.cache
    }

    /// Returns the capability registry.
    #[inline]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Returns the capability registry, to attach hooks to foreign types.
    #[inline]
    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// Returns the arena owning every built object.
    #[inline]
    pub fn arena(&self) -> &SchemaArena {
        &self.arena
    }

    /// Returns the object behind `id`.
    pub fn object(&self, id: ObjectId) -> Result<&ObjectType, EncodeError> {
        self.arena.get(id).ok_or(EncodeError::DanglingObject(id))
    }

    /// Renders `ty` with the object names of this encoder.
    #[inline]
    pub fn display<'a>(&'a self, ty: &'a SchemaType) -> TypeDisplay<'a> {
        self.arena.display(ty)
    }

    // -------------------------------------------------------------------------
    // Object mode

    /// Builds, or returns the already built, object of `T`.
    ///
    /// The options apply to the object and are ignored on a cache hit. The
    /// object is named after the type name, without generic punctuation:
    /// `Page<User>` gives `PageUser`.
    ///
    /// # Errors
    ///
    /// - [`NotStruct`](EncodeError::NotStruct) if `T` is not a struct.
    /// - [`NotAnObject`](EncodeError::NotAnObject) if another type was cached
    ///   under `T`'s key.
    /// - [`TypeNotRecognizedInStruct`](EncodeError::TypeNotRecognizedInStruct)
    ///   if a tagged field, here or in a nested struct, has no mapping. The
    ///   same error is returned for every later request of the types whose
    ///   build it interrupted.
    pub fn struct_of<T: GetTypeMeta + ?Sized>(
        &mut self,
        options: &[SchemaOption],
    ) -> Result<ObjectId, EncodeError> {
        self.registry.register::<T>();
        self.struct_of_info(T::type_info(), options)
    }

    /// [`struct_of`](Self::struct_of) from type info, pointers are stripped.
    pub fn struct_of_info(
        &mut self,
        info: &'static TypeInfo,
        options: &[SchemaOption],
    ) -> Result<ObjectId, EncodeError> {
        let info = info.deref_pointers();

        if let Some(ty) = self.cached(info)? {
            log::trace!("object cache hit: {}", info.type_path());
            return ty
                .as_object()
                .ok_or(EncodeError::NotAnObject(info.type_path()));
        }

        let struct_info = info
            .as_struct()
            .map_err(|_| EncodeError::NotStruct(info.type_path()))?;

        let name = object_name(struct_info.type_name());
        let mut object = ObjectType::new(name.as_str());
        for option in options {
            option.apply(OptionTarget::Object(&mut object), self)?;
        }

        // Registered before the fields are walked, so a field of the type
        // being built resolves to this handle.
        let id = self.arena.insert(object);
        self.cache.register(info, SchemaType::Object(id));
        log::debug!("building object `{name}` ({})", info.type_path());

        let outermost = self.building.is_empty();
        self.building.push(id);
        let result = self.populate_object(id, struct_info);

        // Objects finished inside a failed build may point at unfinished
        // ones, every object the outermost build started is marked.
        if outermost {
            let started = core::mem::take(&mut self.building);
            if let Err(err) = &result {
                log::debug!("{} objects left unfinished by {}", started.len(), info.type_path());
                for started in started {
                    self.cache.fail(started, err.clone());
                }
            }
        }

        result.map(|()| id)
    }

    fn populate_object(&mut self, id: ObjectId, info: &StructInfo) -> Result<(), EncodeError> {
        for named in info.iter() {
            let (Some(tag), Some(handle)) = (FieldTag::of(named), named.type_handle()) else {
                continue;
            };

            let ty = self
                .resolve_tagged(handle, tag)
                .map_err(|err| err.in_struct(info.type_path(), named.name()))?;

            let mut field = Field::new(tag.name(), ty);
            field.resolve = self.resolver_of(handle);

            let object = self
                .arena
                .get_mut(id)
                .ok_or(EncodeError::DanglingObject(id))?;
            if object.add_field(tag.name(), field).is_some() {
                log::warn!(
                    "{}: field `{}` replaces an earlier field exposed as `{}`",
                    info.type_path(),
                    named.name(),
                    tag.name(),
                );
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Argument mode

    /// Builds the argument map of `T`.
    ///
    /// The map itself is not cached, the field types are.
    ///
    /// # Errors
    ///
    /// - [`NotStruct`](EncodeError::NotStruct) if `T` is not a struct, before
    ///   any field is looked at.
    /// - [`TypeNotRecognizedInStruct`](EncodeError::TypeNotRecognizedInStruct)
    ///   if a tagged field has no mapping.
    pub fn args_of<T: GetTypeMeta + ?Sized>(&mut self) -> Result<ArgumentMap, EncodeError> {
        self.registry.register::<T>();
        self.args_of_info(T::type_info())
    }

    /// [`args_of`](Self::args_of) from type info, pointers are stripped.
    pub fn args_of_info(&mut self, info: &'static TypeInfo) -> Result<ArgumentMap, EncodeError> {
        let info = info.deref_pointers();
        let struct_info = info
            .as_struct()
            .map_err(|_| EncodeError::NotStruct(info.type_path()))?;

        let mut args = ArgumentMap::new();
        for named in struct_info.iter() {
            let (Some(tag), Some(handle)) = (FieldTag::of(named), named.type_handle()) else {
                continue;
            };

            let ty = self
                .resolve_tagged(handle, tag)
                .map_err(|err| err.in_struct(struct_info.type_path(), named.name()))?;

            if args.insert(tag.name(), Argument::new(ty)).is_some() {
                log::warn!(
                    "{}: argument `{}` replaces an earlier argument exposed as `{}`",
                    struct_info.type_path(),
                    named.name(),
                    tag.name(),
                );
            }
        }
        Ok(args)
    }

    // -------------------------------------------------------------------------
    // List and field mode

    /// Returns a list of `T`'s schema type.
    ///
    /// `T` is the item type: `array_of::<User>` gives `[User]`. Pointers
    /// around `T` are stripped. For a struct `T` the options apply to its
    /// object when it is first built, otherwise they are ignored.
    pub fn array_of<T: GetTypeMeta + ?Sized>(
        &mut self,
        options: &[SchemaOption],
    ) -> Result<SchemaType, EncodeError> {
        self.registry.register::<T>();

        let handle = TypeHandle::of::<T>().deref_pointers();
        let info = handle.type_info();

        if let Some(ty) = self.cached(info)? {
            log::trace!("list item cache hit: {}", info.type_path());
            return Ok(SchemaType::list(ty.clone()));
        }

        let item = match info {
            TypeInfo::Struct(_) => SchemaType::Object(self.struct_of_info(info, options)?),
            _ => self.build_type(&handle)?,
        };
        self.cache.register(info, item.clone());
        Ok(SchemaType::list(item))
    }

    /// Builds `T`'s object and wraps it in a field descriptor.
    ///
    /// The field is named after the object until it is added to one. The
    /// options apply to the field.
    pub fn field_of<T: GetTypeMeta + ?Sized>(
        &mut self,
        options: &[SchemaOption],
    ) -> Result<Field, EncodeError> {
        let id = self.struct_of::<T>(&[])?;
        let name = self.object(id)?.name().to_owned();

        let mut field = Field::new(name, SchemaType::Object(id));
        for option in options {
            option.apply(OptionTarget::Field(&mut field), self)?;
        }
        Ok(field)
    }

    // -------------------------------------------------------------------------
    // Field resolution

    /// Resolves the schema type of a field holding the handle's target.
    ///
    /// Pointers are stripped, the cache is consulted, and on a miss the
    /// type is built and cached. Unlike the builders above, a failure is
    /// returned bare, without struct or field context.
    pub fn resolve_type(&mut self, handle: &TypeHandle) -> Result<SchemaType, EncodeError> {
        let handle = handle.deref_pointers();
        let info = handle.type_info();

        if let Some(ty) = self.cached(info)? {
            log::trace!("type cache hit: {}", info.type_path());
            return Ok(ty.clone());
        }

        let ty = self.build_type(&handle)?;
        self.cache.register(info, ty.clone());
        Ok(ty)
    }

    fn resolve_tagged(
        &mut self,
        handle: &TypeHandle,
        tag: FieldTag<'_>,
    ) -> Result<SchemaType, EncodeError> {
        let ty = self.resolve_type(handle)?;
        if !tag.is_non_null() {
            return Ok(ty);
        }
        if ty.is_non_null() {
            log::warn!(
                "`!` on {}, whose schema type is already non-null",
                handle.type_info().type_path(),
            );
        }
        Ok(SchemaType::non_null(ty))
    }

    /// Looks `info` up, returning the recorded error of a failed object.
    fn cached(&self, info: &'static TypeInfo) -> Result<Option<&SchemaType>, EncodeError> {
        let Some(ty) = self.cache.lookup(info) else {
            return Ok(None);
        };
        match self.cache.failure(ty) {
            Some(err) => Err(err.clone()),
            None => Ok(Some(ty)),
        }
    }

    /// Builds the schema type of a non-pointer handle, bypassing the cache.
    fn build_type(&mut self, handle: &TypeHandle) -> Result<SchemaType, EncodeError> {
        let info = handle.type_info();
        log::trace!("resolving {}", info.type_path());

        let provider = self
            .registry
            .get_or_register(handle)
            .get_trait::<TypeTraitTypeProvider>()
            .copied();
        if let Some(provider) = provider {
            return Ok(provider.schema_type());
        }

        if let Some(scalar) = crate::scalar_of(info) {
            return Ok(scalar.into());
        }

        match info {
            TypeInfo::Struct(_) => self.struct_of_info(info, &[]).map(SchemaType::Object),
            TypeInfo::List(list) => Ok(SchemaType::list(self.resolve_type(list.item())?)),
            TypeInfo::Array(array) => Ok(SchemaType::list(self.resolve_type(array.item())?)),
            _ => Err(EncodeError::TypeNotRecognized(info.type_path())),
        }
    }

    fn resolver_of(&mut self, handle: &TypeHandle) -> Option<ResolveFn> {
        let handle = handle.deref_pointers();
        self.registry
            .get_or_register(&handle)
            .get_trait::<TypeTraitResolver>()
            .map(TypeTraitResolver::resolve_fn)
    }
}

fn object_name(type_name: &str) -> String {
    type_name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

// -----------------------------------------------------------------------------
// Tests
