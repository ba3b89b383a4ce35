//! Bakes the resolved configuration into the client as Rust constants.

use crate::{
    env::EnvironmentSource,
    profile::EnvironmentName,
    resolve::{BUILTIN_VARS, BuildConfiguration},
};
use anyhow::Context as _;
use indexmap::IndexMap;
use std::path::Path;

/// File name of the generated module inside `OUT_DIR`.
pub const GENERATED_FILE_NAME: &str = "client_env.rs";

/// Everything the client is allowed to see from its build environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEnv {
    pub environment: EnvironmentName,
    pub config: BuildConfiguration,
    /// Declared extra variables that had a non-empty value.
    pub exposed: IndexMap<String, String>,
}

impl ClientEnv {
    /// Collects the values of the declared variables. Built-in variables are
    /// carried by `config` and skipped here; undeclared names are never read.
    #[must_use]
    pub fn new<'a>(
        environment: EnvironmentName,
        config: BuildConfiguration,
        declared: impl IntoIterator<Item = &'a str>,
        source: &impl EnvironmentSource,
    ) -> Self {
        let exposed = declared
            .into_iter()
            .filter(|name| !BUILTIN_VARS.contains(name))
            .filter_map(|name| {
                source
                    .lookup_non_empty(name)
                    .map(|value| (name.to_string(), value))
            })
            .collect();
        Self {
            environment,
            config,
            exposed,
        }
    }

    /// Source of the generated module. String values use `Debug` formatting,
    /// which yields valid escaped Rust literals.
    #[must_use]
    pub fn render_module(&self) -> String {
        let entries: String = self
            .exposed
            .iter()
            .map(|(name, value)| format!("\n    ({name:?}, {value:?}),"))
            .collect();
        let close = if entries.is_empty() { "" } else { "\n" };
        format!(
            "// @generated by search-ui-builder
pub const ENVIRONMENT: &str = {environment:?};
pub const BASE_PATH: &str = {base_path:?};
pub const BACKEND_API_URL: &str = {backend_api_url:?};
pub const EXPOSED: &[(&str, &str)] = &[{entries}{close}];
",
            environment = self.environment.as_str(),
            base_path = self.config.base_path,
            backend_api_url = self.config.backend_api_url,
        )
    }

    /// Writes the module into `out_dir`, leaving the file untouched when the
    /// content is unchanged so dependent crates are not rebuilt.
    pub fn write_module(&self, out_dir: &Path) -> anyhow::Result<()> {
        let path = out_dir.join(GENERATED_FILE_NAME);
        let content = self.render_module();
        if std::fs::read_to_string(&path).is_ok_and(|existing| existing == content) {
            return Ok(());
        }
        std::fs::write(&path, content).with_context(|| format!("cannot write {path:?}"))
    }
}
