//! Error types shared by the schema, store and dispatch layers

use crate::fields::FieldKind;
use std::path::PathBuf;

/// Errors raised by collaborators around the form core.
///
/// Malformed field input (unknown types, bad presets, empty stored values)
/// never produces one of these; those paths degrade to defined fallbacks.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schema {}: {message}", path.display())]
    SchemaParse { path: PathBuf, message: String },

    #[error("Failed to parse values {}: {message}", path.display())]
    ValuesParse { path: PathBuf, message: String },

    #[error("Duplicate field id in schema: {0}")]
    DuplicateFieldId(String),

    #[error("Failed to load assets for {kind} editor: {message}")]
    AssetLoad { kind: FieldKind, message: String },
}

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;
