use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`bind`](crate::bind()) and [`Binder::bind`](crate::Binder::bind).
///
/// Every variant carries the structured context (field, key, raw value,
/// declared type) needed to render a diagnostic without parsing a message
/// string.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    #[error("required key '{key}' is missing or empty")]
    MissingKey { key: &'static str },

    #[error("field '{field}' has type {type_name}, which cannot be bound")]
    UnsupportedFieldType {
        field: &'static str,
        type_name: &'static str,
    },

    #[error("field '{field}' ({type_name}): cannot coerce value '{value}' from key '{key}': {source}")]
    Coerce {
        field: &'static str,
        type_name: &'static str,
        key: &'static str,
        value: String,
        source: CoerceCause,
    },

    #[error("failed to load override file '{path}': {source}")]
    OverrideLoad {
        path: PathBuf,
        source: dotenvy::Error,
    },
}

/// The underlying parse failure inside a [`BindError::Coerce`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoerceCause {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error("not a recognized boolean token")]
    Bool,
}
