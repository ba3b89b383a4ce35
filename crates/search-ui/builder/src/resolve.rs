use crate::env::EnvironmentSource;

/// Variable holding the path prefix the client is served under.
pub const BASE_PATH_VAR: &str = "BASE_PATH";
/// Variable holding the location of the search backend.
pub const BACKEND_API_URL_VAR: &str = "BACKEND_API_URL";

pub const DEFAULT_BASE_PATH: &str = "/";
/// Local development backend.
pub const DEFAULT_BACKEND_API_URL: &str = "http://localhost:8000";

/// Variables every client build is allowed to read.
pub const BUILTIN_VARS: [&str; 2] = [BASE_PATH_VAR, BACKEND_API_URL_VAR];

/// Settings baked into the client bundle. Both fields are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    pub base_path: String,
    pub backend_api_url: String,
}

impl BuildConfiguration {
    #[must_use]
    pub fn from_source(source: &impl EnvironmentSource) -> Self {
        resolve(source).config
    }
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: BuildConfiguration,
    /// Names of the variables that were absent or empty and got their default.
    pub defaulted: Vec<&'static str>,
}

impl Resolution {
    #[must_use]
    pub fn is_defaulted(&self, name: &str) -> bool {
        self.defaulted.contains(&name)
    }
}

/// Resolves every field independently: the variable's value when it is set
/// and non-empty, the literal default otherwise. Never fails.
#[must_use]
pub fn resolve(source: &impl EnvironmentSource) -> Resolution {
    let mut defaulted = Vec::new();
    let mut field = |name: &'static str, default: &str| {
        source.lookup_non_empty(name).unwrap_or_else(|| {
            defaulted.push(name);
            default.to_string()
        })
    };
    let base_path = field(BASE_PATH_VAR, DEFAULT_BASE_PATH);
    let backend_api_url = field(BACKEND_API_URL_VAR, DEFAULT_BACKEND_API_URL);
    Resolution {
        config: BuildConfiguration {
            base_path,
            backend_api_url,
        },
        defaulted,
    }
}
