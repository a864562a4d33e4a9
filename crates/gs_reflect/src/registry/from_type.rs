use crate::info::Typed;

/// Builds a [`TypeTrait`] for the concrete type `T`.
///
/// `#[derive(Record)]` calls this for every capability listed in
/// `#[record(...)]`, passing the result to [`TypeMeta::insert_trait`].
///
/// [`TypeTrait`]: crate::registry::TypeTrait
/// [`TypeMeta::insert_trait`]: crate::registry::TypeMeta::insert_trait
pub trait FromType<T: Typed + ?Sized> {
    fn from_type() -> Self;
}
