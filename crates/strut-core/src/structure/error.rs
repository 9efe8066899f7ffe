//! # Strut Core Structure Errors
//!
//! Defines error types specific to the structure resolution engine.
//!
//! Absence is never an error here: a missing directory scans as empty and a
//! missing spec file loads as an empty sequence. [`StructureError`] covers
//! the genuinely fatal cases only: a present-but-malformed spec file, and
//! filesystem faults other than "not found".
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("Structure spec error for '{path}': {message}")]
    SpecParse {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

// Helper for creating Io errors, ensuring path is always included.
impl StructureError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        StructureError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }
}

/// Shorthand for Result with the structure error type
pub type Result<T> = std::result::Result<T, StructureError>;
