//! # Strut Core Loader Errors
//!
//! Defines error types for the module loader boundary. A failing load
//! action aborts the boot sequence; `not_found` diagnostics never reach
//! this layer because the reconciler already excluded them from the schema.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Load action failed for '{path}': {message}")]
    ActionFailed {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Shorthand for Result with the loader error type
pub type Result<T> = std::result::Result<T, LoaderError>;
