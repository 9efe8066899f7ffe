//! Spec loader: reads the optional declarative ordering/subset file for a
//! scan level.
//!
//! The system is spec-optional everywhere: a missing file is an empty
//! sequence, not an error. A file that exists but is not valid JSON is
//! fatal to its scan level, since a corrupt ordering declaration cannot be
//! safely guessed.
use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use crate::structure::entry::SpecEntry;
use crate::structure::error::{Result, StructureError};

/// Load and parse the spec file at `spec_path` into an ordered sequence of
/// entries. Returns an empty sequence if the file does not exist.
pub async fn load_spec(spec_path: &Path) -> Result<Vec<SpecEntry>> {
    let content = match fs::read_to_string(spec_path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StructureError::io(e, "read_spec", spec_path.to_path_buf())),
    };

    serde_json::from_str(&content).map_err(|e| StructureError::SpecParse {
        path: spec_path.to_path_buf(),
        message: format!("Failed to parse spec JSON: {}", e),
        source: Some(Box::new(e)),
    })
}
