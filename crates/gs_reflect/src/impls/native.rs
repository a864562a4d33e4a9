use crate::impls::NonGenericTypeInfoCell;
use crate::info::{PrimitiveInfo, PrimitiveKind, TypeInfo, TypePath, Typed};
use crate::registry::{GetTypeMeta, TypeMeta};

macro_rules! impl_native {
    ($($ty:ident => $kind:ident),* $(,)?) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Primitive(PrimitiveInfo::new::<Self>(PrimitiveKind::$kind))
                })
            }
        }

        impl GetTypeMeta for $ty {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }
        }
    )*};
}

impl_native! {
    bool => Bool,
    str => Str,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl TypePath for String {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::string::String"
    }

    #[inline]
    fn type_name() -> &'static str {
        "String"
    }
}

impl Typed for String {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Primitive(PrimitiveInfo::new::<Self>(PrimitiveKind::String)))
    }
}

impl GetTypeMeta for String {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{PrimitiveKind, TypePath, Typed};

    #[test]
    fn primitive_paths_are_bare() {
        assert_eq!(<u64 as TypePath>::type_path(), "u64");
        assert_eq!(<str as TypePath>::type_name(), "str");
        assert_eq!(<String as TypePath>::type_path(), "alloc::string::String");
        assert_eq!(<String as TypePath>::type_name(), "String");
    }

    #[test]
    fn primitive_kinds() {
        let kind = |info: &crate::info::TypeInfo| info.as_primitive().unwrap().kind();

        assert_eq!(kind(i16::type_info()), PrimitiveKind::I16);
        assert_eq!(kind(String::type_info()), PrimitiveKind::String);
        assert!(kind(usize::type_info()).is_integer());
        assert!(kind(f32::type_info()).is_float());
        assert!(kind(str::type_info()).is_string());
        assert!(!kind(bool::type_info()).is_integer());
    }
}
