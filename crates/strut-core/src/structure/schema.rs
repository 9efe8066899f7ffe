//! Schema builder: the public entry points the application loader calls,
//! one per scan level, composing scan + spec load + merge.
use std::path::Path;

use crate::structure::entry::{DiskEntry, LoaderSchema, StructureInfo};
use crate::structure::error::Result;
use crate::structure::{merge, scanner, spec};

/// Which scan feeds a structure operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanLevel {
    /// Application root: immediate subdirectories are plugins
    Plugins,
    /// Plugin root: subdirectories are components, files are modules
    Components,
}

impl ScanLevel {
    async fn scan(self, base_path: &Path) -> Result<Vec<DiskEntry>> {
        match self {
            ScanLevel::Plugins => scanner::list_plugins(base_path).await,
            ScanLevel::Components => scanner::list_components(base_path).await,
        }
    }
}

/// Build the merged component/module schema for a single plugin.
pub async fn get_components_loader_schema(
    plugin_dir: &Path,
    spec_path: &Path,
) -> Result<LoaderSchema> {
    let on_disk = scanner::list_components(plugin_dir).await?;
    let spec_entries = spec::load_spec(spec_path).await?;
    Ok(merge::merge(&on_disk, &spec_entries, plugin_dir))
}

/// Build the merged plugin schema for the whole application.
///
/// Plugin-level spec entries never declare nested `modules`: plugins are a
/// flat namespace of opaque units here, and their internal component
/// structure is resolved separately per plugin by
/// [`get_components_loader_schema`].
pub async fn get_plugins_loader_schema(
    app_root_dir: &Path,
    spec_path: &Path,
) -> Result<LoaderSchema> {
    let on_disk = scanner::list_plugins(app_root_dir).await?;
    let spec_entries = spec::load_spec(spec_path).await?;
    Ok(merge::merge(&on_disk, &spec_entries, app_root_dir))
}

/// Diagnostic variant: the raw unmerged snapshot of one scan level.
///
/// `not_found` is computed by direct name lookup only, without recursing
/// into modules; this feeds introspection and debugging, not the loader.
pub async fn get_structure_info(
    base_path: &Path,
    spec_path: &Path,
    level: ScanLevel,
) -> Result<StructureInfo> {
    let on_disk = level.scan(base_path).await?;
    let spec_entries = spec::load_spec(spec_path).await?;

    let not_found = spec_entries
        .iter()
        .filter(|s| !on_disk.iter().any(|d| d.name() == s.name))
        .map(|s| base_path.join(&s.name))
        .collect();

    Ok(StructureInfo {
        on_disk,
        spec: spec_entries,
        not_found,
    })
}
