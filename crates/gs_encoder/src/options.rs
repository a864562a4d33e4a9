use core::fmt;
use std::sync::Arc;

use gs_reflect::info::TypeHandle;
use gs_reflect::registry::GetTypeMeta;
use gs_schema::{Argument, Field, ObjectType, ResolveError, ResolveFn, ResolveParams, SchemaType, Value};

use crate::{EncodeError, Encoder};

// -----------------------------------------------------------------------------
// OptionTarget

/// The descriptor a [`SchemaOption`] is applied to.
pub enum OptionTarget<'a> {
    Field(&'a mut Field),
    Argument(&'a mut Argument),
    Object(&'a mut ObjectType),
}

impl OptionTarget<'_> {
    /// Returns the target kind, as named by [`EncodeError::NotSupported`].
    pub const fn kind(&self) -> &'static str {
        match self {
            OptionTarget::Field(_) => "Field",
            OptionTarget::Argument(_) => "Argument",
            OptionTarget::Object(_) => "Object",
        }
    }
}

// -----------------------------------------------------------------------------
// SchemaOption

/// A setting applied to a built field, argument or object.
///
/// | constructor | Field | Argument | Object |
/// |---|---|---|---|
/// | [`with_description`](Self::with_description) | ✓ | ✓ | ✓ |
/// | [`with_default_value`](Self::with_default_value) | | ✓ | |
/// | [`with_deprecation_reason`](Self::with_deprecation_reason) | ✓ | | |
/// | [`with_resolve`](Self::with_resolve) | ✓ | | |
/// | [`with_type`](Self::with_type) | ✓ | ✓ | |
/// | [`with_args`](Self::with_args) | ✓ | | |
///
/// Any other combination fails with [`EncodeError::NotSupported`].
///
/// # Examples
///
/// ```
/// use gs_encoder::{Encoder, OptionTarget, SchemaOption};
/// use gs_schema::{Argument, Scalar};
///
/// let mut encoder = Encoder::new();
/// let mut arg = Argument::new(Scalar::Int.into());
///
/// SchemaOption::with_default_value(10)
///     .apply(OptionTarget::Argument(&mut arg), &mut encoder)
///     .unwrap();
/// assert_eq!(arg.default_value, Some(10.into()));
///
/// let err = SchemaOption::with_resolve(|_| Ok(0.into()))
///     .apply(OptionTarget::Argument(&mut arg), &mut encoder)
///     .unwrap_err();
/// assert_eq!(err.to_string(), "`Argument` is not supported");
/// ```
#[derive(Clone)]
pub struct SchemaOption {
    kind: OptionKind,
}

#[derive(Clone)]
enum OptionKind {
    Description(String),
    DefaultValue(Value),
    DeprecationReason(String),
    Resolve(ResolveFn),
    Type(SchemaType),
    Args(TypeHandle),
}

impl SchemaOption {
    /// Sets the description of a field, argument or object.
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            kind: OptionKind::Description(description.into()),
        }
    }

    /// Sets the default value of an argument.
    pub fn with_default_value(value: impl Into<Value>) -> Self {
        Self {
            kind: OptionKind::DefaultValue(value.into()),
        }
    }

    /// Sets the deprecation reason of a field.
    pub fn with_deprecation_reason(reason: impl Into<String>) -> Self {
        Self {
            kind: OptionKind::DeprecationReason(reason.into()),
        }
    }

    /// Replaces the resolver of a field.
    pub fn with_resolve<F>(resolve: F) -> Self
    where
        F: Fn(ResolveParams<'_>) -> Result<Value, ResolveError> + Send + Sync + 'static,
    {
        Self {
            kind: OptionKind::Resolve(Arc::new(resolve)),
        }
    }

    /// Replaces the resolved type of a field or argument.
    pub fn with_type(ty: SchemaType) -> Self {
        Self {
            kind: OptionKind::Type(ty),
        }
    }

    /// Sets the arguments of a field to the argument map of `T`.
    ///
    /// The map is built when the option is applied, by the encoder handed
    /// to [`apply`](Self::apply).
    pub fn with_args<T: GetTypeMeta + ?Sized>() -> Self {
        Self {
            kind: OptionKind::Args(TypeHandle::of::<T>()),
        }
    }

    /// Applies the option to `target`.
    ///
    /// # Errors
    ///
    /// [`NotSupported`](EncodeError::NotSupported) for a target the option
    /// does not apply to, or any error of
    /// [`Encoder::args_of`] for [`with_args`](Self::with_args).
    pub fn apply(&self, target: OptionTarget<'_>, encoder: &mut Encoder) -> Result<(), EncodeError> {
        match (&self.kind, target) {
            (OptionKind::Description(text), OptionTarget::Field(field)) => {
                field.description = Some(text.clone());
            }
            (OptionKind::Description(text), OptionTarget::Argument(arg)) => {
                arg.description = Some(text.clone());
            }
            (OptionKind::Description(text), OptionTarget::Object(object)) => {
                object.set_description(text.as_str());
            }
            (OptionKind::DefaultValue(value), OptionTarget::Argument(arg)) => {
                arg.default_value = Some(value.clone());
            }
            (OptionKind::DeprecationReason(reason), OptionTarget::Field(field)) => {
                field.deprecation_reason = Some(reason.clone());
            }
            (OptionKind::Resolve(resolve), OptionTarget::Field(field)) => {
                field.resolve = Some(resolve.clone());
            }
            (OptionKind::Type(ty), OptionTarget::Field(field)) => {
                field.ty = ty.clone();
            }
            (OptionKind::Type(ty), OptionTarget::Argument(arg)) => {
                arg.ty = ty.clone();
            }
            (OptionKind::Args(handle), OptionTarget::Field(field)) => {
                field.args = encoder.args_of_info(handle.type_info())?;
            }
            (_, target) => return Err(EncodeError::NotSupported(target.kind())),
        }
        Ok(())
    }
}

impl fmt::Debug for SchemaOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            OptionKind::Description(text) => f.debug_tuple("Description").field(text).finish(),
            OptionKind::DefaultValue(value) => f.debug_tuple("DefaultValue").field(value).finish(),
            OptionKind::DeprecationReason(reason) => {
                f.debug_tuple("DeprecationReason").field(reason).finish()
            }
            OptionKind::Resolve(_) => f.write_str("Resolve(<fn>)"),
            OptionKind::Type(ty) => f.debug_tuple("Type").field(ty).finish(),
            OptionKind::Args(handle) => f.debug_tuple("Args").field(handle).finish(),
        }
    }
}

#[cfg(test)]
#[allow(dead_code)]
mod tests {
    use gs_reflect::derive::Record;
    use gs_schema::{Argument, Field, ObjectType, ResolveParams, Scalar, SchemaType, Value};

    use super::{OptionTarget, SchemaOption};
    use crate::{EncodeError, Encoder};

    #[derive(Record)]
    struct Paging {
        #[graphql("!first")]
        first: u32,
        #[graphql("after")]
        after: Option<String>,
    }

    fn field() -> Field {
        Field::new("items", Scalar::String.into())
    }

    #[test]
    fn description_applies_everywhere() {
        let mut encoder = Encoder::new();
        let option = SchemaOption::with_description("docs");

        let mut field = field();
        let mut arg = Argument::new(Scalar::Int.into());
        let mut object = ObjectType::new("Item");

        option.apply(OptionTarget::Field(&mut field), &mut encoder).unwrap();
        option.apply(OptionTarget::Argument(&mut arg), &mut encoder).unwrap();
        option.apply(OptionTarget::Object(&mut object), &mut encoder).unwrap();

        assert_eq!(field.description.as_deref(), Some("docs"));
        assert_eq!(arg.description.as_deref(), Some("docs"));
        assert_eq!(object.description(), Some("docs"));
    }

    #[test]
    fn unsupported_targets() {
        let mut encoder = Encoder::new();
        let mut object = ObjectType::new("Item");
        let mut field = field();

        let cases = [
            SchemaOption::with_default_value(1),
            SchemaOption::with_deprecation_reason("old"),
            SchemaOption::with_type(Scalar::Id.into()),
            SchemaOption::with_args::<Paging>(),
        ];
        for option in &cases {
            let err = option
                .apply(OptionTarget::Object(&mut object), &mut encoder)
                .unwrap_err();
            assert_eq!(err, EncodeError::NotSupported("Object"), "{option:?}");
        }

        let err = SchemaOption::with_default_value(Value::Null)
            .apply(OptionTarget::Field(&mut field), &mut encoder)
            .unwrap_err();
        assert_eq!(err, EncodeError::NotSupported("Field"));
    }

    #[test]
    fn type_and_resolve_override() {
        let mut encoder = Encoder::new();
        let mut field = field();

        SchemaOption::with_type(SchemaType::non_null(Scalar::Id.into()))
            .apply(OptionTarget::Field(&mut field), &mut encoder)
            .unwrap();
        SchemaOption::with_resolve(|params: ResolveParams<'_>| Ok(params.source.clone()))
            .apply(OptionTarget::Field(&mut field), &mut encoder)
            .unwrap();

        assert_eq!(encoder.display(&field.ty).to_string(), "ID!");
        let resolve = field.resolve.unwrap();
        let source = Value::Bool(true);
        let args = serde_json::Map::new();
        let params = ResolveParams {
            source: &source,
            args: &args,
            field_name: "items",
        };
        assert_eq!(resolve(params), Ok(Value::Bool(true)));
    }

    #[test]
    fn args_are_built_by_the_given_encoder() {
        let mut encoder = Encoder::new();
        let mut field = field();

        SchemaOption::with_args::<Paging>()
            .apply(OptionTarget::Field(&mut field), &mut encoder)
            .unwrap();

        assert_eq!(field.args.len(), 2);
        assert_eq!(
            field.args.get("first").unwrap().ty,
            SchemaType::non_null(Scalar::Int.into())
        );
        assert_eq!(field.args.get("after").unwrap().ty, Scalar::String.into());
        assert!(encoder.cache().len() >= 2);
    }
}
