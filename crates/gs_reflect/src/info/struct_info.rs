use gs_utils::hash::HashMap;

use crate::info::{NamedField, Type, TypePath};

/// A container for named struct info.
///
/// # Examples
///
/// ```rust
/// use gs_reflect::{derive::Record, info::Typed};
///
/// #[derive(Record)]
/// struct A {
///     #[graphql("val")]
///     val: f32,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    index: HashMap<&'static str, usize>,
}

impl StructInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The field order is the input order.
    pub fn new<T: TypePath + ?Sized>(fields: &[NamedField]) -> Self {
        let index = fields
            .iter()
            .enumerate()
            .map(|(at, field)| (field.name(), at))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            index,
        }
    }

    /// Returns the [`NamedField`] for the given declared `name`.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.index.get(name).map(|&at| &self.fields[at])
    }

    /// Returns the [`NamedField`] at the given index.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the index of the given declared field `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the number of declared fields, tagged or not.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

// -----------------------------------------------------------------------------
// Tests
