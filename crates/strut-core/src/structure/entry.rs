use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind tag for structure entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Top-level on-disk unit grouping components
    Plugin,
    /// A named group of modules; a subdirectory within a plugin
    Component,
    /// A leaf loadable unit; a file within a component or at plugin root
    Module,
}

/// An entry discovered on disk by the scanner.
///
/// Identity is `(name, kind)` within a parent scope; sibling names are
/// unique per parent because they come from a single directory listing.
/// Components carry their module listing; plugins and modules are opaque
/// leaves at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiskEntry {
    Plugin {
        name: String,
    },
    Component {
        name: String,
        modules: Vec<DiskEntry>,
    },
    Module {
        name: String,
    },
}

impl DiskEntry {
    /// The entry name (file or directory name within its parent)
    pub fn name(&self) -> &str {
        match self {
            DiskEntry::Plugin { name }
            | DiskEntry::Component { name, .. }
            | DiskEntry::Module { name } => name,
        }
    }

    /// The kind tag for this entry
    pub fn kind(&self) -> EntryKind {
        match self {
            DiskEntry::Plugin { .. } => EntryKind::Plugin,
            DiskEntry::Component { .. } => EntryKind::Component,
            DiskEntry::Module { .. } => EntryKind::Module,
        }
    }
}

/// Declarative counterpart of a disk entry, read from a spec file.
///
/// The `kind` tag is informative; `name` is the merge key. A spec entry
/// with no `modules` means "use default disk ordering for children".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<SpecEntry>>,
}

/// A node of the merged loader schema.
///
/// Every node is normalized to carry a `modules` sequence, empty for
/// leaves, so the loader can iterate without shape checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: EntryKind,

    pub modules: Vec<MergedEntry>,
}

impl MergedEntry {
    /// A normalized leaf node with no children
    pub fn leaf(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            modules: Vec::new(),
        }
    }
}

/// Raw diagnostic snapshot of a scan level: the full disk listing, the
/// parsed spec, and the spec entries absent from disk by direct lookup.
/// Not merged for consumption; used for introspection and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureInfo {
    pub on_disk: Vec<DiskEntry>,
    pub spec: Vec<SpecEntry>,
    pub not_found: Vec<PathBuf>,
}

/// The final consumable artifact: the merged, ordered schema the loader
/// iterates, plus the non-fatal `not_found` diagnostic paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderSchema {
    pub merged_specs: Vec<MergedEntry>,
    pub not_found: Vec<PathBuf>,
}
