use std::sync::Arc;

use thiserror::Error;

/// The value type flowing through resolvers.
pub type Value = serde_json::Value;

/// Input handed to a [`ResolveFn`].
#[derive(Clone, Copy, Debug)]
pub struct ResolveParams<'a> {
    /// The parent value the field is resolved on.
    pub source: &'a Value,
    /// Arguments supplied for the field.
    pub args: &'a serde_json::Map<String, Value>,
    /// The exposed name of the field being resolved.
    pub field_name: &'a str,
}

/// Error returned by a [`ResolveFn`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ResolveError {
    message: String,
}

impl ResolveError {
    /// Creates an error with the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A field-resolution callback: `(params) -> (value, error)`.
pub type ResolveFn = Arc<dyn Fn(ResolveParams<'_>) -> Result<Value, ResolveError> + Send + Sync>;
