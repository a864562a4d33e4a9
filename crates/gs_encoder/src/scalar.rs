use gs_reflect::impls::is_date_time_type;
use gs_reflect::info::{PrimitiveKind, TypeInfo};
use gs_schema::Scalar;

/// Returns the built-in scalar a type maps to, if any.
///
/// Date/time values map to `DateTime`, matched by type identity before the
/// kind is looked at. Every integer width maps to `Int` and every float
/// width to `Float`.
///
/// # Examples
///
/// ```
/// use gs_encoder::scalar_of;
/// use gs_reflect::info::Typed;
/// use gs_schema::Scalar;
///
/// assert_eq!(scalar_of(u16::type_info()), Some(Scalar::Int));
/// assert_eq!(scalar_of(String::type_info()), Some(Scalar::String));
/// assert_eq!(scalar_of(Vec::<u16>::type_info()), None);
/// ```
pub fn scalar_of(info: &TypeInfo) -> Option<Scalar> {
    if is_date_time_type(info.ty()) {
        return Some(Scalar::DateTime);
    }

    match info {
        TypeInfo::Primitive(primitive) => Some(primitive_scalar(primitive.kind())),
        _ => None,
    }
}

const fn primitive_scalar(kind: PrimitiveKind) -> Scalar {
    if kind.is_integer() {
        Scalar::Int
    } else if kind.is_float() {
        Scalar::Float
    } else if kind.is_string() {
        Scalar::String
    } else {
        Scalar::Boolean
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use gs_reflect::info::Typed;
    use gs_schema::Scalar;

    use super::scalar_of;

    #[test]
    fn integer_widths() {
        for info in [
            i8::type_info(),
            i16::type_info(),
            i32::type_info(),
            i64::type_info(),
            isize::type_info(),
            u8::type_info(),
            u64::type_info(),
            usize::type_info(),
        ] {
            assert_eq!(scalar_of(info), Some(Scalar::Int), "{}", info.type_path());
        }
    }

    #[test]
    fn other_primitives() {
        assert_eq!(scalar_of(f32::type_info()), Some(Scalar::Float));
        assert_eq!(scalar_of(f64::type_info()), Some(Scalar::Float));
        assert_eq!(scalar_of(bool::type_info()), Some(Scalar::Boolean));
        assert_eq!(scalar_of(str::type_info()), Some(Scalar::String));
    }

    #[test]
    fn date_time_takes_precedence() {
        assert_eq!(scalar_of(SystemTime::type_info()), Some(Scalar::DateTime));
    }

    #[test]
    fn pointers_are_not_scalars() {
        assert_eq!(scalar_of(Option::<bool>::type_info()), None);
    }
}
