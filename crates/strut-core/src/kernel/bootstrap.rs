use std::path::{Path, PathBuf};

use crate::kernel::constants;
use crate::kernel::error::Result;
use crate::loader::{LoadPlan, ModuleLoader, run_schema};
use crate::structure::{
    self, LoaderSchema, ScanLevel, StructureInfo,
};

/// Outcome of a completed boot sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootReport {
    /// Absolute module paths in the exact order the loader visited them
    pub load_order: Vec<PathBuf>,
    /// Spec-declared entries absent from disk, across all scan levels;
    /// reported as a warning, never fatal
    pub not_found: Vec<PathBuf>,
}

/// Main application struct coordinating the bootstrap sequence.
///
/// Holds the resolved application paths and drives structure resolution:
/// once for the whole application (plugin ordering), then once per plugin
/// (component/module ordering), feeding each merged schema to the module
/// loader. Every boot resolves fresh from disk; nothing is cached across
/// invocations.
pub struct Application {
    app_dir: PathBuf,
    plugins_dir: PathBuf,
}

impl Application {
    /// Create an application rooted at `app_dir`.
    pub fn new<P: AsRef<Path>>(app_dir: P) -> Self {
        let app_dir = app_dir.as_ref().to_path_buf();
        let plugins_dir = app_dir.join(constants::PLUGINS_DIR_NAME);
        log::info!("Initializing {} v{}", constants::APP_NAME, constants::APP_VERSION);
        log::info!("Application directory: {}", app_dir.display());

        Self {
            app_dir,
            plugins_dir,
        }
    }

    /// The application root directory
    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    /// The plugins root directory under the application root
    pub fn plugins_dir(&self) -> &Path {
        &self.plugins_dir
    }

    /// Conventional spec file path for a scanned directory
    fn spec_path(dir: &Path) -> PathBuf {
        dir.join(constants::SPEC_FILE_NAME)
    }

    /// Resolve the application-level plugin schema.
    pub async fn plugins_schema(&self) -> Result<LoaderSchema> {
        let spec_path = Self::spec_path(&self.plugins_dir);
        let schema =
            structure::get_plugins_loader_schema(&self.plugins_dir, &spec_path).await?;
        Ok(schema)
    }

    /// Resolve the component/module schema for a single plugin.
    pub async fn components_schema(&self, plugin_name: &str) -> Result<LoaderSchema> {
        let plugin_dir = self.plugins_dir.join(plugin_name);
        let spec_path = Self::spec_path(&plugin_dir);
        let schema = structure::get_components_loader_schema(&plugin_dir, &spec_path).await?;
        Ok(schema)
    }

    /// Raw structure snapshot for diagnostics: the whole application when
    /// `plugin_name` is `None`, otherwise the named plugin.
    pub async fn structure_info(&self, plugin_name: Option<&str>) -> Result<StructureInfo> {
        let info = match plugin_name {
            None => {
                let spec_path = Self::spec_path(&self.plugins_dir);
                structure::get_structure_info(&self.plugins_dir, &spec_path, ScanLevel::Plugins)
                    .await?
            }
            Some(name) => {
                let plugin_dir = self.plugins_dir.join(name);
                let spec_path = Self::spec_path(&plugin_dir);
                structure::get_structure_info(&plugin_dir, &spec_path, ScanLevel::Components)
                    .await?
            }
        };
        Ok(info)
    }

    /// Run the boot sequence with a caller-supplied loader.
    ///
    /// Plugins load in merged plugin order; within each plugin, components
    /// and modules load in merged component order. Returns the accumulated
    /// `not_found` diagnostic paths; these are warned about and boot
    /// continues, since a spec may legitimately reference entries added
    /// later or conditionally.
    pub async fn boot_with<L: ModuleLoader>(&self, loader: &mut L) -> Result<Vec<PathBuf>> {
        log::info!("Booting application at {}", self.app_dir.display());

        let plugins = self.plugins_schema().await?;
        warn_not_found(&plugins.not_found);
        let mut not_found = plugins.not_found;

        for plugin in &plugins.merged_specs {
            log::info!("Loading plugin: {}", plugin.name);
            let plugin_dir = self.plugins_dir.join(&plugin.name);
            let schema = self.components_schema(&plugin.name).await?;
            warn_not_found(&schema.not_found);
            not_found.extend(schema.not_found.iter().cloned());
            run_schema(&schema, &plugin_dir, loader).await?;
        }

        Ok(not_found)
    }

    /// Run the boot sequence with the default recording loader, returning
    /// the ordered load plan.
    pub async fn boot(&self) -> Result<BootReport> {
        let mut plan = LoadPlan::new();
        let not_found = self.boot_with(&mut plan).await?;
        let report = BootReport {
            load_order: plan.into_actions(),
            not_found,
        };
        log::info!("Boot complete: {} load actions planned", report.load_order.len());
        Ok(report)
    }
}

fn warn_not_found(paths: &[PathBuf]) {
    for path in paths {
        log::warn!("Spec entry not found on disk: {}", path.display());
    }
}
