//! Reconciler: merges a declarative spec against the on-disk listing.
//!
//! The spec is a strict ordering/filtering projection, never a union: disk
//! entries it does not reference are dropped from the merged result, and
//! spec entries absent on disk become `not_found` diagnostics. With no spec
//! at all, the merged result is the full disk listing in default order.
use std::path::Path;

use crate::structure::entry::{DiskEntry, EntryKind, LoaderSchema, MergedEntry, SpecEntry};

/// Merge `spec` against `on_disk` for one scan level.
///
/// Processes spec entries in spec order, matching by name (the kind tag is
/// informative only). A matched component recurses into its modules with
/// the same rule; nested `not_found` paths accumulate into the outer list.
/// Recursion depth is fixed at two by design: components contain modules,
/// and modules are leaves.
///
/// Duplicate names within one spec level are matched independently against
/// the disk listing, not deduplicated.
pub fn merge(on_disk: &[DiskEntry], spec: &[SpecEntry], base_path: &Path) -> LoaderSchema {
    // No spec for this level: the full disk listing in default order.
    if spec.is_empty() {
        return LoaderSchema {
            merged_specs: on_disk.iter().map(normalize).collect(),
            not_found: Vec::new(),
        };
    }

    let mut merged_specs = Vec::new();
    let mut not_found = Vec::new();

    for spec_entry in spec {
        let Some(disk_entry) = on_disk.iter().find(|d| d.name() == spec_entry.name) else {
            not_found.push(base_path.join(&spec_entry.name));
            continue;
        };

        match disk_entry {
            DiskEntry::Component { name, modules } => {
                // An absent or empty sub-spec falls back to disk order,
                // which is exactly what merging against an empty spec does.
                let sub_spec = spec_entry.modules.as_deref().unwrap_or_default();
                let sub = merge(modules, sub_spec, &base_path.join(name));
                not_found.extend(sub.not_found);
                merged_specs.push(MergedEntry {
                    name: name.clone(),
                    kind: EntryKind::Component,
                    modules: sub.merged_specs,
                });
            }
            // Plugins are a flat namespace at this layer and modules are
            // leaves: any nested spec modules on either are ignored.
            DiskEntry::Plugin { .. } | DiskEntry::Module { .. } => {
                merged_specs.push(normalize(disk_entry));
            }
        }
    }

    LoaderSchema {
        merged_specs,
        not_found,
    }
}

/// Normalize a disk entry into schema shape: every node carries a
/// `modules` sequence, empty for leaves.
fn normalize(entry: &DiskEntry) -> MergedEntry {
    match entry {
        DiskEntry::Plugin { name } => MergedEntry::leaf(name.clone(), EntryKind::Plugin),
        DiskEntry::Module { name } => MergedEntry::leaf(name.clone(), EntryKind::Module),
        DiskEntry::Component { name, modules } => MergedEntry {
            name: name.clone(),
            kind: EntryKind::Component,
            modules: modules.iter().map(normalize).collect(),
        },
    }
}
