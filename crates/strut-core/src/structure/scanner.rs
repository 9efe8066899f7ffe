//! Disk scanner: classifies a directory tree into plugins, components, and
//! modules with a deterministic default ordering.
//!
//! The scanner normalizes absence locally: a target directory that does not
//! exist yields an empty listing, which lets optional plugin groups be
//! absent without aborting boot. Individual entries whose metadata cannot
//! be read (permission error, race with concurrent deletion) are skipped
//! with a warning; any other filesystem fault is fatal.
use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use crate::structure::entry::DiskEntry;
use crate::structure::error::{Result, StructureError};

/// List the immediate plugin subdirectories of `root_dir`.
///
/// Files at this level are ignored. The result is sorted lexicographically
/// by name ascending (byte order, case-sensitive), so repeated scans of an
/// unchanged tree are byte-identical.
pub async fn list_plugins(root_dir: &Path) -> Result<Vec<DiskEntry>> {
    let mut plugins = Vec::new();

    let Some(mut entries) = open_dir(root_dir).await? else {
        return Ok(plugins);
    };

    while let Some(entry) = next_entry(&mut entries, root_dir).await? {
        let Some((name, metadata)) = stat_entry(&entry).await else {
            continue;
        };

        if metadata.is_dir() {
            plugins.push(DiskEntry::Plugin { name });
        }
    }

    plugins.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(plugins)
}

/// List the immediate children of `plugin_dir`.
///
/// Each subdirectory becomes a component (with its modules resolved by
/// [`load_component`]); each regular file becomes a module. Components
/// always sort before modules regardless of name; within each group, names
/// sort lexicographically ascending.
pub async fn list_components(plugin_dir: &Path) -> Result<Vec<DiskEntry>> {
    let mut components = Vec::new();
    let mut modules = Vec::new();

    let Some(mut entries) = open_dir(plugin_dir).await? else {
        return Ok(components);
    };

    while let Some(entry) = next_entry(&mut entries, plugin_dir).await? {
        let Some((name, metadata)) = stat_entry(&entry).await else {
            continue;
        };

        if metadata.is_dir() {
            components.push(load_component(&name, &entry.path()).await?);
        } else if metadata.is_file() {
            modules.push(DiskEntry::Module { name });
        }
    }

    components.sort_by(|a, b| a.name().cmp(b.name()));
    modules.sort_by(|a, b| a.name().cmp(b.name()));
    components.append(&mut modules);
    Ok(components)
}

/// Load a single component: the immediate files inside `component_dir`,
/// sorted lexicographically by name. Subdirectories are ignored, modules
/// are flat. An empty (or missing) directory yields an empty module list.
pub async fn load_component(name: &str, component_dir: &Path) -> Result<DiskEntry> {
    let mut modules = Vec::new();

    if let Some(mut entries) = open_dir(component_dir).await? {
        while let Some(entry) = next_entry(&mut entries, component_dir).await? {
            let Some((module_name, metadata)) = stat_entry(&entry).await else {
                continue;
            };

            if metadata.is_file() {
                modules.push(DiskEntry::Module { name: module_name });
            }
        }
    }

    modules.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(DiskEntry::Component {
        name: name.to_string(),
        modules,
    })
}

/// Open a directory for listing, mapping "not found" to `None`.
async fn open_dir(dir: &Path) -> Result<Option<fs::ReadDir>> {
    match fs::read_dir(dir).await {
        Ok(entries) => Ok(Some(entries)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StructureError::io(e, "read_dir", dir.to_path_buf())),
    }
}

/// Advance a directory listing, attributing iteration faults to `dir`.
async fn next_entry(entries: &mut fs::ReadDir, dir: &Path) -> Result<Option<fs::DirEntry>> {
    entries
        .next_entry()
        .await
        .map_err(|e| StructureError::io(e, "read_dir_entry", dir.to_path_buf()))
}

/// Resolve an entry's name and metadata, skipping entries that cannot be
/// stat'ed or whose name is not valid UTF-8.
async fn stat_entry(entry: &fs::DirEntry) -> Option<(String, std::fs::Metadata)> {
    let entry_path = entry.path();

    let metadata = match fs::metadata(&entry_path).await {
        Ok(meta) => meta,
        Err(e) => {
            log::warn!(
                "Skipping {}: failed to read metadata: {}",
                entry_path.display(),
                e
            );
            return None;
        }
    };

    match entry.file_name().into_string() {
        Ok(name) => Some((name, metadata)),
        Err(raw) => {
            log::warn!("Skipping entry with non-UTF-8 name: {:?}", raw);
            None
        }
    }
}
