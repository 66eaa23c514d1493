//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PERSONAE_` prefix, `__` between sections
//!    (`PERSONAE_VALIDATION__STRICT=true`)
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

const ENV_PREFIX: &str = "PERSONAE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Validation run settings.
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// One of `auto`, `human`, `plain`, `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Treat recorded validation messages as a failing exit status.
    pub strict: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// A file passed explicitly via `--config` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);

        match config_file {
            Some(path) => Self::load_with(path, true, env),
            None => Self::load_with(&Self::config_path(), false, env),
        }
    }

    fn load_with(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env)
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("invalid configuration values")?;
        config.output_format()?;
        Ok(config)
    }

    /// The configured output format.
    pub fn output_format(&self) -> anyhow::Result<OutputFormat> {
        self.output
            .format
            .parse()
            .map_err(|e| anyhow::anyhow!("output.format: {e}"))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.personae.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "personae", "personae")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".personae.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert!(!cfg.validation.strict);
        assert_eq!(cfg.output_format().unwrap(), OutputFormat::Auto);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let cfg = AppConfig::load_with(Path::new("/nonexistent/personae.toml"), false, no_env())
            .unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        assert!(
            AppConfig::load_with(Path::new("/nonexistent/personae.toml"), true, no_env()).is_err()
        );
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_toml("[validation]\nstrict = true\n\n[output]\nformat = \"json\"\n");
        let cfg = AppConfig::load_with(file.path(), true, no_env()).unwrap();

        assert!(cfg.validation.strict);
        assert_eq!(cfg.output_format().unwrap(), OutputFormat::Json);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_toml("[output]\nno_color = false\n");
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(HashMap::from([(
                "PERSONAE_OUTPUT__NO_COLOR".to_owned(),
                "true".to_owned(),
            )])));

        let cfg = AppConfig::load_with(file.path(), true, env).unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let file = write_toml("[output]\nformat = \"yaml\"\n");
        assert!(AppConfig::load_with(file.path(), true, no_env()).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
