use gs_reflect::info::TypeInfo;
use gs_schema::{ObjectId, SchemaType};
use gs_utils::hash::HashMap;

use crate::EncodeError;

// -----------------------------------------------------------------------------
// CacheKeyPolicy

/// How a [`TypeCache`] names the types it stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CacheKeyPolicy {
    /// Key by [`type_path`](gs_reflect::info::TypePath::type_path), unique per type.
    #[default]
    Qualified,
    /// Key by [`type_name`](gs_reflect::info::TypePath::type_name).
    ///
    /// Two types sharing a bare name in different modules share one entry,
    /// the second one resolved gets the first one's schema type.
    BareName,
}

// -----------------------------------------------------------------------------
// TypeCache

/// The resolved schema types of one encoder.
///
/// Append-only: an entry is never evicted or replaced by the encoder.
/// Pointer layers are stripped before a key is computed, so `Box<User>`,
/// `Option<User>` and `User` share one entry.
///
/// An object whose build failed can be [marked](Self::fail). Entries naming
/// it stay, but the encoder reports the recorded error instead of handing
/// them out.
///
/// # Examples
///
/// ```
/// use gs_encoder::TypeCache;
/// use gs_reflect::info::Typed;
/// use gs_schema::{Scalar, SchemaType};
///
/// let mut cache = TypeCache::default();
/// cache.register(u32::type_info(), Scalar::Int.into());
///
/// assert_eq!(cache.lookup(Box::<u32>::type_info()), Some(&SchemaType::Scalar(Scalar::Int)));
/// assert_eq!(cache.lookup(u64::type_info()), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TypeCache {
    policy: CacheKeyPolicy,
    types: HashMap<&'static str, SchemaType>,
    failed: HashMap<ObjectId, EncodeError>,
}

impl TypeCache {
    /// Creates an empty cache.
    #[inline]
    pub fn new(policy: CacheKeyPolicy) -> Self {
        Self {
            policy,
            types: HashMap::default(),
            failed: HashMap::default(),
        }
    }

    /// Returns the key policy.
    #[inline]
    pub fn policy(&self) -> CacheKeyPolicy {
        self.policy
    }

    /// Returns the key `info` is stored under.
    pub fn key(&self, info: &'static TypeInfo) -> &'static str {
        let info = info.deref_pointers();
        match self.policy {
            CacheKeyPolicy::Qualified => info.type_path(),
            CacheKeyPolicy::BareName => info.type_name(),
        }
    }

    /// Returns the schema type stored for `info`.
    #[inline]
    pub fn lookup(&self, info: &'static TypeInfo) -> Option<&SchemaType> {
        self.types.get(self.key(info))
    }

    /// Stores `ty` for `info`, returning the previous entry if any.
    #[inline]
    pub fn register(&mut self, info: &'static TypeInfo, ty: SchemaType) -> Option<SchemaType> {
        let key = self.key(info);
        self.types.insert(key, ty)
    }

    /// Records that building the object `id` failed with `err`.
    ///
    /// The first recorded error of an object is kept.
    pub fn fail(&mut self, id: ObjectId, err: EncodeError) {
        self.failed.entry(id).or_insert(err);
    }

    /// Returns the build error of the object `ty` names, through any list
    /// or non-null wrappers.
    pub fn failure(&self, ty: &SchemaType) -> Option<&EncodeError> {
        let id = ty.named_type().as_object()?;
        self.failed.get(&id)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if nothing was resolved yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates the entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SchemaType)> {
        self.types.iter().map(|(key, ty)| (*key, ty))
    }
}
