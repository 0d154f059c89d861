//! Error types for code generation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema document parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] astgen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] astgen_schema::SchemaError),

    /// Reading or writing a file failed.
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// A field type is not valid in the target language.
    #[error("invalid type '{ty}' for field '{field}' in node type '{node_type}'")]
    InvalidType {
        /// Node type name.
        node_type: String,
        /// Field name.
        field: String,
        /// Declared type.
        ty: String,
    },

    /// Unknown target language name.
    #[error("unknown target '{name}'")]
    UnknownTarget {
        /// Requested target name.
        name: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an IO error for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
