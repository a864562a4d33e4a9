//! See [`Record`].

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";
static FIELD_TAG_ATTRIBUTE_NAME: &str = "graphql";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements `TypePath`, `Typed` and `GetTypeMeta`.
///
/// - Structs with named fields become `TypeInfo::Struct`.
/// - Tuple and unit structs become `TypeInfo::Opaque`.
/// - Enums and unions are rejected.
///
/// ## Field Tags
///
/// A field takes part in schema building only when tagged:
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct User {
///     #[graphql("!id")]      // exposed as `id`, non-null
///     id: u64,
///     #[graphql("nickname")] // exposed as `nickname`, nullable
///     name: String,
///     session: Session,      // untagged, invisible to the schema
/// }
/// ```
///
/// The tag text is kept verbatim. A leading `!` marks the field as required,
/// the rest is the exposed name. Untagged fields do not need metadata.
///
/// ## Type Attributes
///
/// ```rust, ignore
/// #[derive(Record)]
/// #[record(TypeProvider, ResolverProvider)]
/// #[record(type_path = "app::model::Money")]
/// #[record(type_trait = TypeTraitAudit)]
/// #[record(opaque)]
/// struct Money { /* ... */ }
/// ```
///
/// - `TypeProvider`: inserts the encoder's `TypeTraitTypeProvider`; the type
///   must implement `TypeProvider`.
/// - `ResolverProvider`: inserts the encoder's `TypeTraitResolver`; the type
///   must implement `ResolverProvider`.
/// - `type_trait = Path`: inserts any other `TypeTrait` built with `FromType<Self>`.
/// - `type_path = "..."`: overrides the path (default: `module_path!()` plus the ident).
///   Generic parameters are appended automatically.
/// - `opaque`: describes a named struct as `Opaque`, hiding its fields.
///
/// ## Generics
///
/// Type parameters are supported and bounded by `GetTypeMeta`. Lifetime and
/// const parameters are rejected.
#[proc_macro_derive(Record, attributes(record, graphql))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::RecordDerive::from_derive_input(&ast) {
        Ok(derive) => impls::impl_record(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
