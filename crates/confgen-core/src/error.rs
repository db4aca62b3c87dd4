//! Unified error types for confgen.
//!
//! All of these are deterministic input-validation failures. They are
//! unrecoverable for the file being generated: the renderer reports the
//! first error it encounters scanning left to right and stops, and the
//! driver aborts the batch rather than attempting partial completion.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while parsing properties or rendering templates.
#[derive(Error, Debug)]
pub enum ConfgenError {
    // --- Properties ---

    /// A `key=value` entry does not split into exactly one key and one value.
    /// Keys must be non-empty and neither key nor value may contain `=`.
    #[error("malformed property entry '{entry}' (expected exactly one key=value)")]
    MalformedProperty { entry: String },

    /// The JSON property file was not found.
    #[error("property file not found at {path}")]
    PropertiesNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON property file exists but is not a flat object of strings.
    #[error("failed to parse property file at {path}")]
    PropertiesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Rendering ---

    /// A `@KEY@` placeholder references a key absent from the property table.
    #[error("value for {key} not defined")]
    UndefinedKey { key: String },

    /// A template ends inside an open `@...@` span (odd number of `@`).
    #[error("malformed template {source_id}: unterminated @...@ placeholder")]
    MalformedTemplate { source_id: String },

    // --- File generation ---

    /// The `.in` template file for a requested destination is missing.
    #[error("template file not found at {path}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, ConfgenError>`.
pub type Result<T> = std::result::Result<T, ConfgenError>;
