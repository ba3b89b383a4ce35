use crate::env::EnvironmentSource;
use derive_more::Display;

/// Selects the environment profile explicitly.
pub const ENVIRONMENT_VAR: &str = "SEARCH_UI_ENV";

const DEVELOPMENT: &str = "development";
const PRODUCTION: &str = "production";

/// Name of a deployment environment, e.g. `development` or `production`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct EnvironmentName(String);

impl From<String> for EnvironmentName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for EnvironmentName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl EnvironmentName {
    #[must_use]
    pub fn development() -> Self {
        Self::from(DEVELOPMENT)
    }

    #[must_use]
    pub fn production() -> Self {
        Self::from(PRODUCTION)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        self.0 == DEVELOPMENT
    }

    /// `SEARCH_UI_ENV` when set, otherwise derived from Cargo's `PROFILE`:
    /// `release` builds are `production`, everything else is `development`.
    #[must_use]
    pub fn detect(source: &impl EnvironmentSource, cargo_profile: Option<&str>) -> Self {
        if let Some(name) = source.lookup_non_empty(ENVIRONMENT_VAR) {
            return Self(name);
        }
        match cargo_profile {
            Some("release") => Self::production(),
            _ => Self::development(),
        }
    }
}
