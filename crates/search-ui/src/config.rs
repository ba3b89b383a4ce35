//! Configuration baked into the bundle by `build.rs`.

use yew::AttrValue;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/client_env.rs"));
}

/// Exposed variable holding the page title.
pub const TITLE_VAR: &str = "SEARCH_UI_TITLE";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub environment: AttrValue,
    pub base_path: AttrValue,
    pub backend_api_url: AttrValue,
    exposed: &'static [(&'static str, &'static str)],
}

impl ClientConfig {
    /// The values resolved when this crate was compiled.
    pub fn from_build() -> Self {
        Self {
            environment: AttrValue::Static(generated::ENVIRONMENT),
            base_path: AttrValue::Static(generated::BASE_PATH),
            backend_api_url: AttrValue::Static(generated::BACKEND_API_URL),
            exposed: generated::EXPOSED,
        }
    }

    /// Development configuration with the given values and nothing exposed.
    pub fn new(base_path: impl Into<AttrValue>, backend_api_url: impl Into<AttrValue>) -> Self {
        Self {
            environment: AttrValue::Static("development"),
            base_path: base_path.into(),
            backend_api_url: backend_api_url.into(),
            exposed: &[],
        }
    }

    /// Value of a declared variable, `None` if it was not declared or not set.
    pub fn exposed(&self, name: &str) -> Option<&'static str> {
        self.exposed
            .iter()
            .find_map(|(key, value)| (*key == name).then_some(*value))
    }

    /// Basename for the router: the base path without its trailing slash,
    /// `None` when the client is served from the root.
    pub fn router_basename(&self) -> Option<AttrValue> {
        let trimmed = self.base_path.trim_end_matches('/');
        if trimmed.is_empty() {
            None
        } else if trimmed.starts_with('/') {
            Some(AttrValue::from(trimmed.to_string()))
        } else {
            Some(AttrValue::from(format!("/{trimmed}")))
        }
    }
}
