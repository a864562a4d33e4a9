// -----------------------------------------------------------------------------
// impl_generic_type_path

// `impl<T, U: ?Sized> "module::path"::Ident` implements `TypePath` for
// `Ident<T, U>`, printing parameters by their own paths and names.
macro_rules! impl_generic_type_path {
    (impl<$($param:ident $(: ?$sized:ident)?),+> $module:literal :: $ident:ident) => {
        impl<$($param: $crate::info::TypePath $(+ ?$sized)?),+> $crate::info::TypePath
            for $ident<$($param),+>
        {
            fn type_path() -> &'static str {
                static CELL: $crate::impls::GenericTypePathCell =
                    $crate::impls::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let params = [$(<$param as $crate::info::TypePath>::type_path()),+].join(", ");
                    $crate::impls::concat(&[$module, "::", stringify!($ident), "<", &params, ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: $crate::impls::GenericTypePathCell =
                    $crate::impls::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let params = [$(<$param as $crate::info::TypePath>::type_name()),+].join(", ");
                    $crate::impls::concat(&[stringify!($ident), "<", &params, ">"])
                })
            }
        }
    };
}

pub(crate) use impl_generic_type_path;

// -----------------------------------------------------------------------------
// impl_opaque_record

/// Implements `TypePath`, `Typed` and `GetTypeMeta` for a type whose fields
/// are not described.
///
/// The type becomes [`Opaque`](crate::info::TypeInfo::Opaque): it can still
/// carry capabilities, listed after the type, which is how a newtype gets a
/// custom schema type without exposing its internals.
///
/// The type path defaults to the invoking module plus the type name, and can
/// be given explicitly with `as "path"`.
///
/// # Examples
///
/// ```
/// use gs_reflect::impl_opaque_record;
/// use gs_reflect::info::{TypePath, Typed};
///
/// pub struct Money(i64);
/// pub struct Email(String);
///
/// impl_opaque_record!(Money);
/// impl_opaque_record!(Email as "mail::Email");
///
/// assert!(Money::type_info().as_opaque().is_ok());
/// assert_eq!(Money::type_name(), "Money");
/// assert_eq!(Email::type_path(), "mail::Email");
/// ```
#[macro_export]
macro_rules! impl_opaque_record {
    ($ty:ident as $path:literal $(, $type_trait:path)* $(,)?) => {
        $crate::impl_opaque_record!(@impl $ty, $path, [$($type_trait),*]);
    };
    ($ty:ident $(, $type_trait:path)* $(,)?) => {
        $crate::impl_opaque_record!(
            @impl $ty,
            ::core::concat!(::core::module_path!(), "::", ::core::stringify!($ty)),
            [$($type_trait),*]
        );
    };
    (@impl $ty:ident, $path:expr, [$($type_trait:path),*]) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($ty)
            }
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<$ty>())
                })
            }
        }

        impl $crate::registry::GetTypeMeta for $ty {
            #[allow(unused_mut)]
            fn get_type_meta() -> $crate::registry::TypeMeta {
                let mut meta = $crate::registry::TypeMeta::of::<$ty>();
                $(
                    meta.insert_trait::<$type_trait>(
                        <$type_trait as $crate::registry::FromType<$ty>>::from_type(),
                    );
                )*
                meta
            }
        }
    };
}
