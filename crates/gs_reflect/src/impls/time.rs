use std::time::SystemTime;

use crate::info::Type;

crate::impl_opaque_record!(SystemTime as "std::time::SystemTime");

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
    use crate::registry::{GetTypeMeta, TypeMeta};

    crate::impl_opaque_record!(NaiveDateTime as "chrono::NaiveDateTime");
    crate::impl_opaque_record!(NaiveDate as "chrono::NaiveDate");

    macro_rules! impl_date_time {
        ($($tz:ident),*) => {$(
            impl TypePath for DateTime<$tz> {
                #[inline]
                fn type_path() -> &'static str {
                    concat!("chrono::DateTime<chrono::", stringify!($tz), ">")
                }

                #[inline]
                fn type_name() -> &'static str {
                    concat!("DateTime<", stringify!($tz), ">")
                }
            }

            impl Typed for DateTime<$tz> {
                fn type_info() -> &'static TypeInfo {
                    static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                    CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
                }
            }

            impl GetTypeMeta for DateTime<$tz> {
                #[inline]
                fn get_type_meta() -> TypeMeta {
                    TypeMeta::of::<Self>()
                }
            }
        )*};
    }

    impl_date_time!(Utc, Local, FixedOffset);

    pub(super) fn is_chrono_date_time(ty: &crate::info::Type) -> bool {
        ty.is::<DateTime<Utc>>()
            || ty.is::<DateTime<Local>>()
            || ty.is::<DateTime<FixedOffset>>()
            || ty.is::<NaiveDateTime>()
    }
}

/// Returns `true` if `ty` is a date/time value.
///
/// Matches [`SystemTime`], and with the `chrono` feature
/// `DateTime<Utc>`, `DateTime<Local>`, `DateTime<FixedOffset>` and
/// `NaiveDateTime`. `NaiveDate` carries no time and does not match.
///
/// # Examples
///
/// ```
/// use std::time::SystemTime;
/// use gs_reflect::{impls::is_date_time_type, info::Type};
///
/// assert!(is_date_time_type(&Type::of::<SystemTime>()));
/// assert!(!is_date_time_type(&Type::of::<u64>()));
/// ```
pub fn is_date_time_type(ty: &Type) -> bool {
    if ty.is::<SystemTime>() {
        return true;
    }

    #[cfg(feature = "chrono")]
    if chrono_impls::is_chrono_date_time(ty) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::is_date_time_type;
    use crate::info::{Type, TypePath, Typed};

    #[test]
    fn system_time_is_opaque() {
        assert_eq!(SystemTime::type_path(), "std::time::SystemTime");
        assert_eq!(SystemTime::type_name(), "SystemTime");
        assert!(SystemTime::type_info().as_opaque().is_ok());
    }

    #[test]
    fn wrappers_are_not_date_time() {
        assert!(!is_date_time_type(&Type::of::<Option<SystemTime>>()));
        assert!(!is_date_time_type(&Type::of::<String>()));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_date_time() {
        use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

        assert!(is_date_time_type(&Type::of::<DateTime<Utc>>()));
        assert!(is_date_time_type(&Type::of::<NaiveDateTime>()));
        assert!(!is_date_time_type(&Type::of::<NaiveDate>()));
        assert_eq!(<DateTime<Utc>>::type_path(), "chrono::DateTime<chrono::Utc>");
        assert_eq!(<DateTime<Utc>>::type_name(), "DateTime<Utc>");
    }
}
