use crate::info::{TypeHandle, TypeInfo};
use crate::registry::GetTypeMeta;

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named struct field.
///
/// A field carries its raw tag, the text of `#[graphql("...")]`. Fields
/// without a tag take no part in schema building, and
/// [`#[derive(Record)]`](crate::derive::Record) does not even require their
/// type to have metadata ([`hidden`](Self::hidden)).
///
/// # Examples
///
/// ```
/// use gs_reflect::info::NamedField;
///
/// let field = NamedField::tagged::<String>("first_name", "!firstName");
/// assert_eq!(field.name(), "first_name");
/// assert_eq!(field.tag(), Some("!firstName"));
/// assert!(field.type_handle().unwrap().type_is::<String>());
///
/// let field = NamedField::hidden("cache");
/// assert_eq!(field.tag(), None);
/// assert!(field.type_handle().is_none());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NamedField {
    name: &'static str,
    tag: Option<&'static str>,
    handle: Option<TypeHandle>,
}

impl NamedField {
    /// Creates an untagged field of type `T`.
    #[inline]
    pub const fn new<T: GetTypeMeta + ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            tag: None,
            handle: Some(TypeHandle::of::<T>()),
        }
    }

    /// Creates a field of type `T` carrying `tag`.
    #[inline]
    pub const fn tagged<T: GetTypeMeta + ?Sized>(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag: Some(tag),
            handle: Some(TypeHandle::of::<T>()),
        }
    }

    /// Creates an untagged field whose type has no metadata.
    #[inline]
    pub const fn hidden(name: &'static str) -> Self {
        Self {
            name,
            tag: None,
            handle: None,
        }
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the raw tag, if any.
    #[inline]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Returns the link to the field's type.
    #[inline]
    pub const fn type_handle(&self) -> Option<&TypeHandle> {
        self.handle.as_ref()
    }

    /// Returns the field type's [`TypeInfo`], if it has metadata.
    #[inline]
    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        self.handle.as_ref().map(TypeHandle::type_info)
    }
}
