//! Metadata implementations for foreign types, plus helpers for writing
//! new ones.
//!
//! - [`concat`]: string concatenation for `TypePath` implementations.
//! - [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`], [`GenericTypePathCell`]:
//!   static storage for `Typed` and `TypePath`.
//! - [`is_date_time_type`]: identity check for date/time values.
//! - [`impl_opaque_record!`](crate::impl_opaque_record): metadata for a type
//!   whose fields stay hidden.
//!
//! ## Implemented Menu
//!
//! - primitives: `bool`, `i8`-`i128`, `isize`, `u8`-`u128`, `usize`, `f32`, `f64`
//! - strings: `str`, `String`
//! - lists: `Vec<T>`, `VecDeque<T>`, `[T]`
//! - arrays: `[T; N]`
//! - pointers: `&'static T`, `Box<T>`, `Rc<T>`, `Arc<T>`, `Option<T>`
//! - maps: `HashMap<K, V>`, `BTreeMap<K, V>`
//! - trait objects: `dyn Any`, `dyn Any + Send + Sync`
//! - date/time: `SystemTime`, and with the `chrono` feature
//!   `DateTime<Utc>`, `DateTime<Local>`, `DateTime<FixedOffset>`, `NaiveDateTime`
//!
//! `char`, `()` and tuples have no metadata.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod collections;
mod macros;
mod native;
mod pointers;
mod time;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, GenericTypeInfoCell, GenericTypePathCell};
pub use cell::{NonGenericTypeCell, NonGenericTypeInfoCell};
pub use time::is_date_time_type;

pub(crate) use macros::impl_generic_type_path;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use gs_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s, "module::name<T>");
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> String {
    let mut len = 0usize;
    for &item in arr {
        len += item.len();
    }
    let mut res = String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
