use core::any::Any;
use std::rc::Rc;
use std::sync::Arc;

use crate::impls::{self, GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
use crate::info::{DynamicInfo, PointerInfo, TypeInfo, TypePath, Typed};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// &'static T

impl<T: TypePath + ?Sized> TypePath for &'static T {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["&", T::type_path()]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["&", T::type_name()]))
    }
}

// -----------------------------------------------------------------------------
// Smart pointers

impls::impl_generic_type_path!(impl<T: ?Sized> "alloc::boxed"::Box);
impls::impl_generic_type_path!(impl<T: ?Sized> "alloc::rc"::Rc);
impls::impl_generic_type_path!(impl<T: ?Sized> "alloc::sync"::Arc);
impls::impl_generic_type_path!(impl<T> "core::option"::Option);

macro_rules! impl_pointer {
    ($ctor:ident => $($ptr:ty),*) => {$(
        impl<T: GetTypeMeta + ?Sized> Typed for $ptr {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::$ctor::<Self, T>()))
            }
        }

        impl<T: GetTypeMeta + ?Sized> GetTypeMeta for $ptr {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }
    )*};
}

impl_pointer!(new => &'static T, Box<T>, Rc<T>, Arc<T>);

impl<T: GetTypeMeta> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::nullable::<Self, T>()))
    }
}

impl<T: GetTypeMeta> GetTypeMeta for Option<T> {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Trait objects

macro_rules! impl_dynamic {
    ($($obj:ty => $path:literal, $name:literal);* $(;)?) => {$(
        impl TypePath for $obj {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl Typed for $obj {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
            }
        }

        impl GetTypeMeta for $obj {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }
        }
    )*};
}

impl_dynamic! {
    dyn Any => "dyn core::any::Any", "dyn Any";
    dyn Any + Send + Sync => "dyn core::any::Any + Send + Sync", "dyn Any + Send + Sync";
}

#[cfg(test)]
mod tests {
    use core::any::Any;
    use std::sync::Arc;

    use crate::info::{TypePath, Typed};

    #[test]
    fn pointer_paths() {
        assert_eq!(<Box<u8>>::type_path(), "alloc::boxed::Box<u8>");
        assert_eq!(<Option<String>>::type_name(), "Option<String>");
        assert_eq!(<&'static str>::type_path(), "&str");
        assert_eq!(<Arc<dyn Any>>::type_name(), "Arc<dyn Any>");
    }

    #[test]
    fn pointers_strip_to_pointee() {
        let info = <Option<Box<Arc<String>>>>::type_info();
        assert!(info.as_pointer().unwrap().is_nullable());
        assert!(info.deref_pointers().type_is::<String>());

        let info = <Box<u8>>::type_info().as_pointer().unwrap();
        assert!(!info.is_nullable());
        assert!(info.pointee().type_is::<u8>());
    }

    #[test]
    fn any_is_dynamic() {
        let info = <Box<dyn Any>>::type_info().deref_pointers();
        assert!(info.as_dynamic().is_ok());
        assert_eq!(info.type_path(), "dyn core::any::Any");
    }
}
