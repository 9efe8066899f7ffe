//! # Strut Core Module Loader Boundary
//!
//! The consumer side of a [`LoaderSchema`]: iterates the merged, ordered
//! schema and performs one load action per entry, in exactly the array
//! order the reconciler produced. That ordering is the load/initialization
//! contract the rest of the framework depends on.
//!
//! The engine does not execute or sandbox loaded code; the
//! [`ModuleLoader`] trait is the seam where an embedder plugs in the
//! side-effecting load action, and [`LoadPlan`] is the default
//! implementation that simply records the ordered absolute paths.
pub mod error;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::loader::error::Result;
use crate::structure::entry::{EntryKind, LoaderSchema};

/// One load action per schema leaf, invoked in schema order.
#[async_trait]
pub trait ModuleLoader: Send {
    async fn load_module(&mut self, path: &Path) -> Result<()>;
}

/// Recording loader: collects the ordered absolute paths a schema resolves
/// to, without performing any side effects.
#[derive(Debug, Default)]
pub struct LoadPlan {
    actions: Vec<PathBuf>,
}

impl LoadPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded load actions, in visit order
    pub fn actions(&self) -> &[PathBuf] {
        &self.actions
    }

    /// Consume the plan, yielding the ordered action paths
    pub fn into_actions(self) -> Vec<PathBuf> {
        self.actions
    }
}

#[async_trait]
impl ModuleLoader for LoadPlan {
    async fn load_module(&mut self, path: &Path) -> Result<()> {
        log::debug!("Planned load action for {}", path.display());
        self.actions.push(path.to_path_buf());
        Ok(())
    }
}

/// Drive `loader` over a merged schema rooted at `base_path`.
///
/// Components recurse into their modules; plugins and modules are leaves
/// receiving one load action each. The tree depth is fixed at two by the
/// structure design (components contain modules, modules are leaves), so
/// the walk is a plain nested loop rather than general recursion.
pub async fn run_schema<L: ModuleLoader + ?Sized>(
    schema: &LoaderSchema,
    base_path: &Path,
    loader: &mut L,
) -> Result<()> {
    for entry in &schema.merged_specs {
        let entry_path = base_path.join(&entry.name);
        match entry.kind {
            EntryKind::Component => {
                for module in &entry.modules {
                    loader.load_module(&entry_path.join(&module.name)).await?;
                }
            }
            EntryKind::Plugin | EntryKind::Module => {
                loader.load_module(&entry_path).await?;
            }
        }
    }
    Ok(())
}

// Test module declaration
#[cfg(test)]
mod tests;
