//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: static type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): full name, unique per type.
//!     - [`type_name`](TypePath::type_name): name without module path, may be duplicated.
//!
//! - [`Type`]: a `TypeId` plus the names of its `TypePath`.
//!
//! - [`TypeHandle`]: a lazy link to another type's info and meta, used by fields and containers.
//!
//! - [`TypeInfo`]: the shape of a type, one of:
//!     - [`PrimitiveInfo`]: `bool`, integers, floats, `String`, `str`.
//!     - [`StructInfo`]: a struct with named fields ([`NamedField`]) and their tags.
//!     - [`ListInfo`]: growable sequences (`Vec<T>`, `VecDeque<T>`, `[T]`).
//!     - [`ArrayInfo`]: fixed sequences (`[T; N]`).
//!     - [`PointerInfo`]: indirections (`Box<T>`, `Rc<T>`, `Arc<T>`, `&'static T`, `Option<T>`).
//!     - [`MapInfo`]: key/value maps.
//!     - [`OpaqueInfo`]: types whose internals are hidden (date/time values, newtypes).
//!     - [`DynamicInfo`]: trait objects, e.g. `dyn Any`.
//!
//! - [`Typed`]: a static accessor to `TypeInfo`.

// -----------------------------------------------------------------------------
// Modules

mod container_info;
mod field_info;
mod primitive_info;
mod struct_info;
mod type_handle;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use container_info::{ArrayInfo, DynamicInfo, ListInfo, MapInfo, OpaqueInfo, PointerInfo};
pub use field_info::NamedField;
pub use primitive_info::{PrimitiveInfo, PrimitiveKind};
pub use struct_info::StructInfo;
pub use type_handle::TypeHandle;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{Type, TypePath};
pub use typed::Typed;
