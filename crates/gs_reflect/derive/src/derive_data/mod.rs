//! Parsing of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod field_tag;
mod record_derive;
mod record_meta;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_tag::FieldTag;
pub(crate) use record_derive::{RecordDerive, RecordKind};
pub(crate) use record_meta::RecordMeta;
pub(crate) use type_attributes::TypeAttributes;
