//! The build-script entry point tying resolution, policy and injection together.

use crate::{
    env::{DotenvFile, EnvironmentSource, Layered, ProcessEnv},
    file::{CONFIG_FILE_NAME, ConfigFile},
    inject::ClientEnv,
    profile::{ENVIRONMENT_VAR, EnvironmentName},
    resolve::{BACKEND_API_URL_VAR, Resolution, resolve},
};
use anyhow::Context as _;
use std::path::{Path, PathBuf};

/// Overrides the location of the configuration file.
pub const CONFIG_PATH_VAR: &str = "SEARCH_UI_CONFIG";
/// Turns the missing-backend warning into a build failure.
pub const STRICT_VAR: &str = "SEARCH_UI_STRICT";

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error(
        "`BACKEND_API_URL` is not set for the `{environment}` environment, refusing to fall back to the development endpoint"
    )]
    MissingBackendUrl { environment: EnvironmentName },
}

/// Bundler public URL overrides Trunk reads from the environment.
pub const PUBLIC_URL_VARS: [&str; 2] = ["TRUNK_BUILD_PUBLIC_URL", "TRUNK_PUBLIC_URL"];

/// Everything a build script has to do, computed without side effects.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub client_env: ClientEnv,
    /// Files whose change must trigger a rebuild, whether they exist or not.
    pub watched_files: Vec<PathBuf>,
    /// Variables whose change must trigger a rebuild.
    pub watched_vars: Vec<String>,
    pub warnings: Vec<String>,
}

impl BuildPlan {
    /// Values are looked up in the environment profile first, then in
    /// `process`, then in `<manifest_dir>/.env`.
    pub fn new(
        process: &impl EnvironmentSource,
        manifest_dir: &Path,
        cargo_profile: Option<&str>,
    ) -> anyhow::Result<Self> {
        let config_path = process
            .lookup_non_empty(CONFIG_PATH_VAR)
            .map_or_else(|| manifest_dir.join(CONFIG_FILE_NAME), PathBuf::from);
        let file = ConfigFile::load(&config_path)
            .with_context(|| format!("invalid configuration file {config_path:?}"))?;
        let dotenv_path = manifest_dir.join(DotenvFile::FILE_NAME);
        let dotenv = DotenvFile::load(&dotenv_path)
            .with_context(|| format!("invalid dotenv file {dotenv_path:?}"))?;
        let build_env = Layered::new(process, dotenv);

        let environment = EnvironmentName::detect(&build_env, cargo_profile);
        let source = Layered::new(file.profile(&environment), &build_env);

        let resolution = resolve(&source);
        let mut warnings = Vec::new();
        if let Some(warning) =
            check_backend_policy(&environment, &resolution, is_strict(&build_env))?
        {
            warnings.push(warning);
        }
        warnings.extend(check_public_url(&build_env, &resolution.config.base_path));

        let declared = file.declared();
        let mut watched_vars: Vec<String> = declared.iter().map(ToString::to_string).collect();
        watched_vars.extend(
            [ENVIRONMENT_VAR, STRICT_VAR, CONFIG_PATH_VAR]
                .into_iter()
                .chain(PUBLIC_URL_VARS)
                .map(String::from),
        );
        let client_env = ClientEnv::new(
            environment,
            resolution.config,
            declared.iter().copied(),
            &source,
        );
        Ok(Self {
            client_env,
            watched_files: vec![config_path, dotenv_path],
            watched_vars,
            warnings,
        })
    }

    /// Lines a build script prints to instruct Cargo.
    #[must_use]
    pub fn cargo_directives(&self) -> Vec<String> {
        let mut directives: Vec<String> = self
            .watched_vars
            .iter()
            .map(|name| format!("cargo:rerun-if-env-changed={name}"))
            .collect();
        // Cargo reruns the script while a watched file is missing, so a file
        // created later is still picked up.
        directives.extend(
            self.watched_files
                .iter()
                .map(|path| format!("cargo:rerun-if-changed={}", path.display())),
        );
        directives.extend(
            self.warnings
                .iter()
                .map(|warning| format!("cargo:warning={warning}")),
        );
        directives
    }
}

/// Trunk rewrites asset URLs with its own public URL; it has to agree with
/// the base path the router uses.
#[must_use]
pub fn check_public_url(source: &impl EnvironmentSource, base_path: &str) -> Option<String> {
    let normalize = |path: &str| path.trim_end_matches('/').to_string();
    PUBLIC_URL_VARS.iter().find_map(|name| {
        let public_url = source.lookup_non_empty(name)?;
        (normalize(&public_url) != normalize(base_path)).then(|| {
            format!(
                "`{name}` is `{public_url}` but `BASE_PATH` resolved to `{base_path}`, assets and routes will disagree"
            )
        })
    })
}

/// A non-development build that fell back to the development backend gets a
/// warning, or an error in strict mode.
pub fn check_backend_policy(
    environment: &EnvironmentName,
    resolution: &Resolution,
    strict: bool,
) -> Result<Option<String>, PolicyError> {
    if environment.is_development() || !resolution.is_defaulted(BACKEND_API_URL_VAR) {
        return Ok(None);
    }
    if strict {
        return Err(PolicyError::MissingBackendUrl {
            environment: environment.clone(),
        });
    }
    Ok(Some(format!(
        "`{BACKEND_API_URL_VAR}` is not set for the `{environment}` environment, using `{}`",
        resolution.config.backend_api_url
    )))
}

fn is_strict(source: &impl EnvironmentSource) -> bool {
    source
        .lookup_non_empty(STRICT_VAR)
        .is_some_and(|value| !matches!(value.as_str(), "0" | "false"))
}

/// Runs inside a build script: resolves the configuration from the process
/// environment and writes the client module into `OUT_DIR`.
pub fn run() -> anyhow::Result<()> {
    let process = ProcessEnv;
    let manifest_dir = process
        .lookup("CARGO_MANIFEST_DIR")
        .context("`CARGO_MANIFEST_DIR` must be set by Cargo")?;
    let out_dir = process
        .lookup("OUT_DIR")
        .context("`OUT_DIR` must be set by Cargo")?;
    let cargo_profile = process.lookup("PROFILE");

    let plan = BuildPlan::new(&process, Path::new(&manifest_dir), cargo_profile.as_deref())?;
    for directive in plan.cargo_directives() {
        println!("{directive}");
    }
    plan.client_env.write_module(Path::new(&out_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapSource;
    use crate::resolve::{BASE_PATH_VAR, BuildConfiguration};
    use assert_matches::assert_matches;

    const CONFIG: &str = r#"
expose = ["SEARCH_UI_TITLE"]

[environments.production]
BASE_PATH = "/search/"
"#;

    fn manifest_dir_with_config() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), CONFIG).unwrap();
        dir
    }

    #[test]
    fn development_build_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let process = MapSource::new().with(BASE_PATH_VAR, "/app/");
        let plan = BuildPlan::new(&process, dir.path(), Some("debug")).unwrap();
        assert_eq!(
            BuildConfiguration {
                base_path: "/app/".to_string(),
                backend_api_url: "http://localhost:8000".to_string(),
            },
            plan.client_env.config
        );
        assert!(plan.client_env.environment.is_development());
        assert!(plan.warnings.is_empty());
        let directives = plan.cargo_directives();
        assert!(directives.contains(&format!(
            "cargo:rerun-if-changed={}",
            dir.path().join(CONFIG_FILE_NAME).display()
        )));
        assert!(directives.contains(&format!(
            "cargo:rerun-if-changed={}",
            dir.path().join(DotenvFile::FILE_NAME).display()
        )));
    }

    #[test]
    fn shipped_config_lets_process_backend_through() {
        let client_dir = Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap();
        assert!(client_dir.join(CONFIG_FILE_NAME).is_file());
        let process = MapSource::new().with(BACKEND_API_URL_VAR, "https://staging.example.org");
        let plan = BuildPlan::new(&process, client_dir, Some("debug")).unwrap();
        assert_eq!(
            "https://staging.example.org",
            plan.client_env.config.backend_api_url
        );
    }

    #[test]
    fn dotenv_fills_in_unset_process_variables() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DotenvFile::FILE_NAME),
            "BASE_PATH=/from-dotenv/\nBACKEND_API_URL=http://127.0.0.1:9000\n",
        )
        .unwrap();
        let process = MapSource::new()
            .with(BASE_PATH_VAR, "/from-process/")
            .with(BACKEND_API_URL_VAR, "");
        let plan = BuildPlan::new(&process, dir.path(), Some("debug")).unwrap();
        assert_eq!("/from-process/", plan.client_env.config.base_path);
        assert_eq!(
            "http://127.0.0.1:9000",
            plan.client_env.config.backend_api_url
        );
    }

    #[test]
    fn dotenv_can_select_the_environment() {
        let dir = manifest_dir_with_config();
        std::fs::write(
            dir.path().join(DotenvFile::FILE_NAME),
            "SEARCH_UI_ENV=production\nBACKEND_API_URL=https://api.example.org\n",
        )
        .unwrap();
        let plan = BuildPlan::new(&MapSource::new(), dir.path(), Some("debug")).unwrap();
        assert_eq!(EnvironmentName::production(), plan.client_env.environment);
        assert_eq!("/search/", plan.client_env.config.base_path);
    }

    #[test]
    fn mismatched_public_url_warns() {
        let dir = tempfile::tempdir().unwrap();
        let process = MapSource::new()
            .with(BASE_PATH_VAR, "/app/")
            .with("TRUNK_BUILD_PUBLIC_URL", "/");
        let plan = BuildPlan::new(&process, dir.path(), Some("debug")).unwrap();
        assert_eq!(1, plan.warnings.len());
        assert!(plan.warnings[0].starts_with("`TRUNK_BUILD_PUBLIC_URL` is `/`"));
        assert!(
            plan.cargo_directives()
                .contains(&"cargo:rerun-if-env-changed=TRUNK_PUBLIC_URL".to_string())
        );
    }

    #[test]
    fn public_url_check() {
        let base = "/app/";
        assert_eq!(None, check_public_url(&MapSource::new(), base));
        assert_eq!(
            None,
            check_public_url(&MapSource::new().with("TRUNK_BUILD_PUBLIC_URL", ""), base)
        );
        assert_eq!(
            None,
            check_public_url(&MapSource::new().with("TRUNK_PUBLIC_URL", "/app"), base)
        );
        assert!(
            check_public_url(&MapSource::new().with("TRUNK_PUBLIC_URL", "/other/"), base)
                .is_some()
        );
        assert_eq!(
            None,
            check_public_url(&MapSource::new().with("TRUNK_PUBLIC_URL", "/"), "/")
        );
    }

    #[test]
    fn profile_override_beats_process_environment() {
        let dir = manifest_dir_with_config();
        let process = MapSource::new()
            .with(BASE_PATH_VAR, "/from-env/")
            .with(BACKEND_API_URL_VAR, "https://api.example.org")
            .with("SEARCH_UI_TITLE", "Spatial Search");
        let plan = BuildPlan::new(&process, dir.path(), Some("release")).unwrap();
        assert_eq!("/search/", plan.client_env.config.base_path);
        assert_eq!(
            "https://api.example.org",
            plan.client_env.config.backend_api_url
        );
        assert_eq!(
            Some(&"Spatial Search".to_string()),
            plan.client_env.exposed.get("SEARCH_UI_TITLE")
        );
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn production_build_without_backend_warns() {
        let dir = manifest_dir_with_config();
        let plan = BuildPlan::new(&MapSource::new(), dir.path(), Some("release")).unwrap();
        assert_eq!(1, plan.warnings.len());
        let directives = plan.cargo_directives();
        assert!(directives.contains(&format!(
            "cargo:rerun-if-changed={}",
            dir.path().join(CONFIG_FILE_NAME).display()
        )));
        assert!(directives.contains(&"cargo:rerun-if-env-changed=SEARCH_UI_TITLE".to_string()));
        assert!(directives.contains(&"cargo:rerun-if-env-changed=BACKEND_API_URL".to_string()));
        assert!(
            directives
                .last()
                .unwrap()
                .starts_with("cargo:warning=`BACKEND_API_URL` is not set")
        );
    }

    #[test]
    fn strict_production_build_without_backend_fails() {
        let dir = manifest_dir_with_config();
        let process = MapSource::new().with(STRICT_VAR, "1");
        let err = BuildPlan::new(&process, dir.path(), Some("release")).unwrap_err();
        assert_matches!(
            err.downcast_ref::<PolicyError>(),
            Some(PolicyError::MissingBackendUrl { environment }) if *environment == EnvironmentName::production()
        );
    }

    #[test]
    fn strict_development_build_is_fine() {
        let process = MapSource::new().with(STRICT_VAR, "1");
        let dir = tempfile::tempdir().unwrap();
        let plan = BuildPlan::new(&process, dir.path(), Some("debug")).unwrap();
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn strict_disabled_by_false() {
        let dir = tempfile::tempdir().unwrap();
        let process = MapSource::new()
            .with(STRICT_VAR, "false")
            .with(ENVIRONMENT_VAR, "staging");
        let plan = BuildPlan::new(&process, dir.path(), Some("debug")).unwrap();
        assert_eq!(1, plan.warnings.len());
    }

    #[test]
    fn explicit_config_path() {
        let dir = manifest_dir_with_config();
        let other = tempfile::tempdir().unwrap();
        let process = MapSource::new()
            .with(
                CONFIG_PATH_VAR,
                dir.path().join(CONFIG_FILE_NAME).display().to_string(),
            )
            .with(ENVIRONMENT_VAR, "production")
            .with(BACKEND_API_URL_VAR, "https://api.example.org");
        let plan = BuildPlan::new(&process, other.path(), None).unwrap();
        assert_eq!("/search/", plan.client_env.config.base_path);
    }

    #[test]
    fn invalid_config_file_fails_the_build() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[environments.production]\nTOKEN = \"x\"\n",
        )
        .unwrap();
        let err = BuildPlan::new(&MapSource::new(), dir.path(), None).unwrap_err();
        assert_matches!(
            err.downcast_ref::<crate::file::ConfigFileError>(),
            Some(crate::file::ConfigFileError::UndeclaredVariable { .. })
        );
    }
}
