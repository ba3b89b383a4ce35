//! Sources of raw build-time variables.
//!
//! The resolver never reads `std::env` directly. It is handed an
//! [`EnvironmentSource`], so the same interpretation applies whether values
//! come from the process environment, a `.env` file or a configuration file
//! profile.

use indexmap::IndexMap;
use std::path::Path;

/// A read-only mapping from variable name to value.
pub trait EnvironmentSource {
    /// Returns the raw value of `name`, `None` when it is not set.
    fn lookup(&self, name: &str) -> Option<String>;

    /// Returns the value of `name` if it is set to a non-empty string.
    fn lookup_non_empty(&self, name: &str) -> Option<String> {
        self.lookup(name).filter(|value| !value.is_empty())
    }
}

impl<S: EnvironmentSource + ?Sized> EnvironmentSource for &S {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// The environment of the running process, i.e. the one Cargo hands to build scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvironmentSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        std::env::var(name).ok()
    }
}

/// In-memory mapping, used for configuration file profiles and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSource(IndexMap<String, String>);

impl MapSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<IndexMap<String, String>> for MapSource {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl EnvironmentSource for MapSource {
    fn lookup(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// Variables read from a dotenv file, e.g. `<manifest dir>/.env`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotenvFile(MapSource);

impl DotenvFile {
    pub const FILE_NAME: &str = ".env";

    /// Parses the file without touching the process environment. A missing
    /// file yields an empty source.
    pub fn load(path: &Path) -> Result<Self, dotenvy::Error> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(err) if err.not_found() => return Ok(Self::default()),
            Err(err) => return Err(err),
        };
        iter.collect::<Result<MapSource, _>>().map(Self)
    }
}

impl EnvironmentSource for DotenvFile {
    fn lookup(&self, name: &str) -> Option<String> {
        self.0.lookup(name)
    }
}

/// Two sources stacked on top of each other.
///
/// `upper` is consulted first; a value that is missing *or empty* there falls
/// through to `lower`.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    pub upper: A,
    pub lower: B,
}

impl<A, B> Layered<A, B> {
    #[must_use]
    pub fn new(upper: A, lower: B) -> Self {
        Self { upper, lower }
    }
}

impl<A: EnvironmentSource, B: EnvironmentSource> EnvironmentSource for Layered<A, B> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.upper
            .lookup_non_empty(name)
            .or_else(|| self.lower.lookup(name))
    }
}
