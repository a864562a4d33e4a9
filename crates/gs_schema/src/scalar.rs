use core::fmt;

/// A leaf type of the schema.
///
/// `Custom` carries the name of an application-defined scalar, typically
/// returned from a type hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
    Int,
    Float,
    String,
    Boolean,
    Id,
    DateTime,
    Custom(&'static str),
}

impl Scalar {
    /// Returns the name the scalar is exposed under.
    pub const fn name(&self) -> &'static str {
        match self {
            Scalar::Int => "Int",
            Scalar::Float => "Float",
            Scalar::String => "String",
            Scalar::Boolean => "Boolean",
            Scalar::Id => "ID",
            Scalar::DateTime => "DateTime",
            Scalar::Custom(name) => name,
        }
    }
}

impl fmt::Display for Scalar {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
