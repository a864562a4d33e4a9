use gs_schema::ObjectId;
use thiserror::Error;

// -----------------------------------------------------------------------------
// EncodeError

/// An error raised while building schema types.
///
/// Every [`Encoder`](crate::Encoder) method returns these; only the
/// [`global`](crate::global) wrappers turn them into panics, through
/// [`handle_error`](Self::handle_error).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// The type has no scalar, struct, list or hook mapping.
    ///
    /// Carries the type path of the offending type.
    #[error("{0} not recognized")]
    TypeNotRecognized(&'static str),

    /// A [`TypeNotRecognized`](Self::TypeNotRecognized) raised while
    /// resolving the field `field` of `struct_path`.
    #[error("{struct_path}.{field}: {source}")]
    TypeNotRecognizedInStruct {
        source: Box<EncodeError>,
        struct_path: &'static str,
        field: &'static str,
    },

    /// Object building found a cached type that is not an object under the
    /// same key, two types collide.
    #[error("{0} is not an object")]
    NotAnObject(&'static str),

    /// Arguments or objects can only be built from structs.
    #[error("cannot build from a non struct: {0}")]
    NotStruct(&'static str),

    /// An option was applied to a target it does not know.
    #[error("`{0}` is not supported")]
    NotSupported(&'static str),

    /// An object handle was not issued by this encoder's arena.
    #[error("object {0:?} does not belong to this encoder")]
    DanglingObject(ObjectId),
}

impl EncodeError {
    /// Attaches the owning struct and field to a bare
    /// [`TypeNotRecognized`](Self::TypeNotRecognized).
    ///
    /// Other errors already carry their context and are returned unchanged.
    pub(crate) fn in_struct(self, struct_path: &'static str, field: &'static str) -> Self {
        match self {
            EncodeError::TypeNotRecognized(_) => EncodeError::TypeNotRecognizedInStruct {
                source: Box::new(self),
                struct_path,
                field,
            },
            other => other,
        }
    }

    /// Panics with the error message.
    #[cold]
    #[track_caller]
    pub fn handle_error(&self) -> ! {
        panic!("{self}")
    }
}
