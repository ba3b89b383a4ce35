//! The `search-ui.toml` configuration file.
//!
//! One schema covers every deployment environment: the variables the client
//! may read are declared once, and each environment only lists the values it
//! overrides.

use crate::{env::MapSource, profile::EnvironmentName, resolve::BUILTIN_VARS};
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "search-ui.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("cannot read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("environment `{environment}` overrides undeclared variable `{name}`")]
    UndeclaredVariable { environment: String, name: String },
    #[error("`{name}` is not a valid variable name")]
    InvalidName { name: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Variables exposed to the client in addition to the built-in ones.
    #[serde(default)]
    pub expose: Vec<String>,
    /// Per-environment overrides, keyed by environment name.
    #[serde(default)]
    pub environments: IndexMap<String, IndexMap<String, String>>,
}

impl ConfigFile {
    pub fn parse(input: &str) -> Result<Self, ConfigFileError> {
        let file: ConfigFile = toml::from_str(input)?;
        file.validate()?;
        Ok(file)
    }

    /// Reads and validates the file. A missing file is the empty configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        match std::fs::read_to_string(path) {
            Ok(input) => Self::parse(&input),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigFileError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Built-in variables followed by the `expose` list, without duplicates.
    #[must_use]
    pub fn declared(&self) -> IndexSet<&str> {
        BUILTIN_VARS
            .iter()
            .copied()
            .chain(self.expose.iter().map(String::as_str))
            .collect()
    }

    /// Overrides of the given environment; empty when it has none.
    #[must_use]
    pub fn profile(&self, environment: &EnvironmentName) -> MapSource {
        self.environments
            .get(environment.as_str())
            .cloned()
            .map(MapSource::from)
            .unwrap_or_default()
    }

    fn validate(&self) -> Result<(), ConfigFileError> {
        if let Some(name) = self.expose.iter().find(|name| !is_valid_name(name)) {
            return Err(ConfigFileError::InvalidName { name: name.clone() });
        }
        let declared = self.declared();
        for (environment, overrides) in &self.environments {
            if let Some(name) = overrides
                .keys()
                .find(|name| !declared.contains(name.as_str()))
            {
                return Err(ConfigFileError::UndeclaredVariable {
                    environment: environment.clone(),
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
