//! # Strut Core Kernel
//!
//! The `kernel` module drives the framework's boot sequence. It resolves
//! the conventional application paths, invokes the structure resolution
//! engine once for the whole application (plugin ordering) and once per
//! plugin (component/module ordering), and hands the merged schemas to the
//! module loader in the exact order they resolve to.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Application Bootstrapping**: [`Application`](bootstrap::Application)
//!   owns the resolved paths and the boot sequence, producing a
//!   [`BootReport`](bootstrap::BootReport).
//! - **Core Constants**: Conventional directory and file names via the
//!   `constants` submodule.
//! - **Error Handling**: The top-level [`Error`](error::Error) aggregating
//!   subsystem errors, and a `Result` alias, in the `error` submodule.
pub mod bootstrap;
pub mod constants;
pub mod error;

pub use bootstrap::{Application, BootReport};
pub use error::{Error, Result};
