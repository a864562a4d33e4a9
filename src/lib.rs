#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use gs_encoder as encoder;
pub use gs_reflect as reflect;
pub use gs_schema as schema;
pub use gs_utils as utils;

pub use gs_encoder::{EncodeError, Encoder, SchemaOption};
pub use gs_reflect::derive::Record;
