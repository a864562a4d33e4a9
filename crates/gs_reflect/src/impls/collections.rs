use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::impls::{self, GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{ArrayInfo, ListInfo, MapInfo, TypeInfo, TypePath, Typed};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// Lists

impls::impl_generic_type_path!(impl<T> "alloc::vec"::Vec);
impls::impl_generic_type_path!(impl<T> "alloc::collections"::VecDeque);

macro_rules! impl_list {
    ($($list:ident),*) => {$(
        impl<T: GetTypeMeta> Typed for $list<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: GetTypeMeta> GetTypeMeta for $list<T> {
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

impl_list!(Vec, VecDeque);

impl<T: TypePath> TypePath for [T] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["[", T::type_path(), "]"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["[", T::type_name(), "]"]))
    }
}

impl<T: GetTypeMeta> Typed for [T] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: GetTypeMeta> GetTypeMeta for [T] {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Arrays

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            impls::concat(&["[", T::type_path(), "; ", &N.to_string(), "]"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            impls::concat(&["[", T::type_name(), "; ", &N.to_string(), "]"])
        })
    }
}

impl<T: GetTypeMeta, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: GetTypeMeta, const N: usize> GetTypeMeta for [T; N] {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Maps

impls::impl_generic_type_path!(impl<K, V> "std::collections"::HashMap);
impls::impl_generic_type_path!(impl<K, V> "alloc::collections"::BTreeMap);

macro_rules! impl_map {
    ($($map:ident),*) => {$(
        impl<K: GetTypeMeta, V: GetTypeMeta> Typed for $map<K, V> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K: GetTypeMeta, V: GetTypeMeta> GetTypeMeta for $map<K, V> {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<K>();
                registry.register::<V>();
            }
        }
    )*};
}

impl_map!(HashMap, BTreeMap);
