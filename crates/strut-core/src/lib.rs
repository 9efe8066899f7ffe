pub mod kernel;
pub mod loader;
pub mod structure;

// Re-export key public types for easier use by the binary and by embedders.
pub use kernel::Application;
pub use kernel::error::Error as KernelError;
pub use loader::{LoadPlan, ModuleLoader};
pub use structure::{DiskEntry, EntryKind, LoaderSchema, MergedEntry, SpecEntry, StructureInfo};
