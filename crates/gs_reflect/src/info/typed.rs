use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Record)]`](crate::derive::Record), giving
/// access to the type's shape without an instance.
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] so the info is built once:
///
/// ```
/// use gs_reflect::{
///     impls::NonGenericTypeInfoCell,
///     info::{NamedField, StructInfo, TypeInfo, TypePath, Typed},
/// };
///
/// struct Point { x: f64, y: f64 }
///
/// impl TypePath for Point {
///     fn type_path() -> &'static str { "geo::Point" }
///     fn type_name() -> &'static str { "Point" }
/// }
///
/// impl Typed for Point {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(StructInfo::new::<Self>(&[
///             NamedField::tagged::<f64>("x", "!x"),
///             NamedField::tagged::<f64>("y", "!y"),
///         ])))
///     }
/// }
///
/// let info = Point::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time type information.
    fn type_info() -> &'static TypeInfo;
}
