use core::fmt;

use slotmap::SlotMap;

use crate::{ObjectId, ObjectType, SchemaType};

// -----------------------------------------------------------------------------
// SchemaArena

/// Owner of every [`ObjectType`] built by one encoder.
///
/// Construction is two-phase: an object is inserted first (possibly empty),
/// its [`ObjectId`] is handed out, and the object is populated through
/// [`get_mut`](Self::get_mut) afterwards. Anything holding the handle sees
/// the populated object, there is never a second copy.
///
/// # Examples
///
/// ```
/// use gs_schema::{Field, ObjectType, SchemaArena, SchemaType};
///
/// let mut arena = SchemaArena::new();
/// let node = arena.insert(ObjectType::new("Node"));
///
/// // A field referring to its own object.
/// arena
///     .get_mut(node)
///     .unwrap()
///     .add_field("parent", Field::new("parent", SchemaType::Object(node)));
///
/// let parent = arena.get(node).unwrap().field("parent").unwrap();
/// assert_eq!(parent.ty, SchemaType::Object(node));
/// assert_eq!(arena.display(&parent.ty).to_string(), "Node");
/// ```
#[derive(Debug, Default)]
pub struct SchemaArena {
    objects: SlotMap<ObjectId, ObjectType>,
}

impl SchemaArena {
    /// Creates an empty arena.
    #[inline]
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Stores `object` and returns its handle.
    #[inline]
    pub fn insert(&mut self, object: ObjectType) -> ObjectId {
        self.objects.insert(object)
    }

    /// Returns the object behind `id`.
    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&ObjectType> {
        self.objects.get(id)
    }

    /// Returns the mutable object behind `id`.
    #[inline]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut ObjectType> {
        self.objects.get_mut(id)
    }

    /// Returns `true` if `id` was issued by this arena.
    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Returns the number of objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if no object was built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates all objects.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &ObjectType)> {
        self.objects.iter()
    }

    /// Finds an object by name.
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name() == name)
            .map(|(id, _)| id)
    }

    /// Renders `ty` in schema notation: `String`, `[Int]`, `User!`.
    #[inline]
    pub fn display<'a>(&'a self, ty: &'a SchemaType) -> TypeDisplay<'a> {
        TypeDisplay { arena: self, ty }
    }
}

// -----------------------------------------------------------------------------
// TypeDisplay

/// Displays a [`SchemaType`] with object names looked up in an arena.
pub struct TypeDisplay<'a> {
    arena: &'a SchemaArena,
    ty: &'a SchemaType,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            SchemaType::Scalar(scalar) => f.write_str(scalar.name()),
            SchemaType::List(inner) => write!(f, "[{}]", self.arena.display(inner)),
            SchemaType::NonNull(inner) => write!(f, "{}!", self.arena.display(inner)),
            SchemaType::Object(id) => match self.arena.get(*id) {
                Some(object) => f.write_str(object.name()),
                None => f.write_str("<dangling>"),
            },
        }
    }
}
