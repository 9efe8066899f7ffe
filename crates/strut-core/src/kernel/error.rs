//! # Strut Core Kernel Errors
//!
//! Defines the top-level error type surfaced by the boot sequence. The
//! subsystems normalize absence locally (missing directories and missing
//! spec files are empty listings, not errors); everything that does reach
//! this type is fatal to boot.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::loader::error::LoaderError;
use crate::structure::error::StructureError;

/// Top-level error type for the framework boot sequence
#[derive(Debug, ThisError)]
pub enum Error {
    /// Structure resolution failed (malformed spec or filesystem fault)
    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    /// A load action failed
    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
