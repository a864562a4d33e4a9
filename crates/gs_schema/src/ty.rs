use crate::{ObjectId, Scalar};

// -----------------------------------------------------------------------------
// SchemaType

/// A reference to a schema type.
///
/// Equality is structural for wrappers and scalars, and by handle for
/// objects: two `Object` values are equal only if they point at the same
/// arena slot.
///
/// # Examples
///
/// ```
/// use gs_schema::{Scalar, SchemaType};
///
/// let ty = SchemaType::list(SchemaType::non_null(Scalar::String.into()));
/// assert_eq!(ty.named_type(), &SchemaType::Scalar(Scalar::String));
/// assert!(!ty.is_non_null());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Scalar(Scalar),
    List(Box<SchemaType>),
    NonNull(Box<SchemaType>),
    Object(ObjectId),
}

impl SchemaType {
    /// Wraps `inner` in a list-of layer.
    #[inline]
    pub fn list(inner: SchemaType) -> Self {
        SchemaType::List(Box::new(inner))
    }

    /// Wraps `inner` in a non-null layer.
    ///
    /// An already non-null type is returned unchanged, a type never carries
    /// two consecutive non-null layers.
    pub fn non_null(inner: SchemaType) -> Self {
        match inner {
            SchemaType::NonNull(_) => inner,
            other => SchemaType::NonNull(Box::new(other)),
        }
    }

    /// Returns `true` for a non-null wrapper.
    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, SchemaType::NonNull(_))
    }

    /// Returns `true` for a list-of wrapper.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, SchemaType::List(_))
    }

    /// Returns the wrapped type of a list or non-null layer.
    pub fn of_type(&self) -> Option<&SchemaType> {
        match self {
            SchemaType::List(inner) | SchemaType::NonNull(inner) => Some(inner),
            _ => None,
        }
    }

    /// Strips every wrapper, returning the innermost scalar or object.
    pub fn named_type(&self) -> &SchemaType {
        let mut ty = self;
        while let Some(inner) = ty.of_type() {
            ty = inner;
        }
        ty
    }

    /// Returns the object handle if this is an unwrapped object.
    #[inline]
    pub fn as_object(&self) -> Option<ObjectId> {
        match self {
            SchemaType::Object(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the scalar if this is an unwrapped scalar.
    #[inline]
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            SchemaType::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }
}

impl From<Scalar> for SchemaType {
    #[inline]
    fn from(value: Scalar) -> Self {
        SchemaType::Scalar(value)
    }
}

impl From<ObjectId> for SchemaType {
    #[inline]
    fn from(value: ObjectId) -> Self {
        SchemaType::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Scalar, SchemaType};

    #[test]
    fn non_null_is_single_layer() {
        let once = SchemaType::non_null(Scalar::Int.into());
        let twice = SchemaType::non_null(once.clone());
        assert_eq!(once, twice);
        assert_eq!(twice.of_type(), Some(&SchemaType::Scalar(Scalar::Int)));
    }

    #[test]
    fn named_type_strips_wrappers() {
        let ty = SchemaType::non_null(SchemaType::list(SchemaType::list(Scalar::Float.into())));
        assert_eq!(ty.named_type().as_scalar(), Some(Scalar::Float));
        assert!(ty.is_non_null());
        assert!(ty.of_type().unwrap().is_list());
    }
}
