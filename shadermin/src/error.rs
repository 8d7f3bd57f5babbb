//! Error types for shadermin operations

use std::path::PathBuf;
use thiserror::Error;

/// Error type for shadermin operations
///
/// Minification itself cannot fail; these cover loading shader files and
/// rendering embeddable output.
#[derive(Error, Debug)]
pub enum Error {
    /// Shader source file does not exist
    #[error("File not found [{}]", path.display())]
    NotFound {
        /// The path that was requested
        path: PathBuf,
    },

    /// IO error while reading a shader source file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// The path being read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Symbol is not a valid C identifier
    #[error("Invalid C identifier: {0:?}")]
    InvalidSymbol(String),
}

/// Result type for shadermin operations
pub type Result<T> = std::result::Result<T, Error>;
