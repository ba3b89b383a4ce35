//! Build-time configuration for the search UI.
//!
//! Used from the client's `build.rs`:
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     search_ui_builder::run()
//! }
//! ```
//!
//! The base path and the backend URL are resolved from the build environment
//! and written to `$OUT_DIR/client_env.rs`, which the client includes as
//! plain constants.

pub mod env;
pub mod file;
pub mod inject;
pub mod pipeline;
pub mod profile;
pub mod resolve;

pub use env::{DotenvFile, EnvironmentSource, Layered, MapSource, ProcessEnv};
pub use file::{ConfigFile, ConfigFileError};
pub use inject::ClientEnv;
pub use pipeline::{BuildPlan, PolicyError, run};
pub use profile::EnvironmentName;
pub use resolve::{BuildConfiguration, Resolution, resolve};
