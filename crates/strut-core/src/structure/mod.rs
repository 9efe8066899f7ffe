//! # Strut Core Structure Resolution
//!
//! This module is the structure resolution engine at the heart of the
//! framework's bootstrap: it reconciles the on-disk layout of an
//! application's plugins, components, and modules against optional
//! declarative spec files, and emits the normalized, ordered schema the
//! module loader consumes. Load order matters because later-loaded modules
//! commonly depend on earlier-loaded ones being already initialized.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`entry`]**: The data model shared by every stage of resolution:
//!   disk entries, spec entries, merged schema nodes, and the two result
//!   shapes ([`StructureInfo`] and [`LoaderSchema`]).
//! - **[`scanner`]**: Reads a directory tree and classifies its entries as
//!   plugins, components, or modules with a deterministic default ordering.
//! - **[`spec`]**: Loads the optional JSON spec file declaring a desired
//!   subset and ordering of entries.
//! - **[`merge`]**: Reconciles spec order against the disk listing,
//!   recording spec entries missing from disk as `not_found` diagnostics.
//! - **[`schema`]**: The public entry points composing scan, spec load, and
//!   merge for the two scan levels (application-level plugins and
//!   plugin-level components/modules).
//! - **[`error`]**: Defines [`StructureError`] for spec parse failures and
//!   contextual I/O faults.
//!
//! Every result is constructed fresh per invocation; nothing is cached
//! across scans, since the framework expects boot-time freshness.
pub mod entry;
pub mod error;
pub mod merge;
pub mod scanner;
pub mod schema;
pub mod spec;

pub use entry::{DiskEntry, EntryKind, LoaderSchema, MergedEntry, SpecEntry, StructureInfo};
pub use error::StructureError;
pub use merge::merge;
pub use schema::{
    ScanLevel, get_components_loader_schema, get_plugins_loader_schema, get_structure_info,
};
pub use spec::load_spec;

// Test module declaration
#[cfg(test)]
mod tests;
