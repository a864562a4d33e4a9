use core::fmt;

use crate::{OrderedMap, ResolveFn, SchemaType, Value};

// -----------------------------------------------------------------------------
// Field

/// An output field descriptor.
#[derive(Clone)]
pub struct Field {
    pub name: String,
    pub ty: SchemaType,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub resolve: Option<ResolveFn>,
    pub args: ArgumentMap,
}

impl Field {
    /// Creates a field without resolver, arguments or documentation.
    pub fn new(name: impl Into<String>, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            deprecation_reason: None,
            resolve: None,
            args: ArgumentMap::new(),
        }
    }

    /// Returns `true` if a resolver is attached.
    #[inline]
    pub fn has_resolver(&self) -> bool {
        self.resolve.is_some()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("description", &self.description)
            .field("deprecation_reason", &self.deprecation_reason)
            .field("resolve", &self.resolve.as_ref().map(|_| "<fn>"))
            .field("args", &self.args)
            .finish()
    }
}

/// The fields of an object, in declaration order.
pub type FieldMap = OrderedMap<Field>;

// -----------------------------------------------------------------------------
// Argument

/// An input argument descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub ty: SchemaType,
    pub description: Option<String>,
    pub default_value: Option<Value>,
}

impl Argument {
    /// Creates an argument of the given type.
    #[inline]
    pub fn new(ty: SchemaType) -> Self {
        Self {
            ty,
            description: None,
            default_value: None,
        }
    }
}

/// Arguments keyed by exposed name, in declaration order.
pub type ArgumentMap = OrderedMap<Argument>;
