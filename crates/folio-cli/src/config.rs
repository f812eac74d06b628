//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `FOLIO_<SECTION>__<KEY>`, e.g.
//!    `FOLIO_CATALOG__PATH=projects.toml`
//! 3. Config file (`--config`, else the platform config dir)
//! 4. Built-in defaults (always present)
//!
//! A relative `catalog.path` written in the config file is taken relative to
//! that file's directory. One coming from the environment stays relative to
//! the working directory.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "FOLIO";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the catalog comes from.
    pub catalog: CatalogConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file to read instead of the built-in catalog.
    pub path: Option<PathBuf>,
    /// `json` or `toml`; inferred from the extension when unset.
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// A file passed explicitly via `--config` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let file = || {
            config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(required)
        };

        let settings = config::Config::builder()
            .add_source(file())
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        let mut cfg: Self = settings
            .try_deserialize()
            .context("configuration has an unexpected shape")?;

        let from_file: Option<PathBuf> = config::Config::builder()
            .add_source(file())
            .build()
            .ok()
            .and_then(|c| c.get("catalog.path").ok());
        cfg.anchor_catalog_path(path, from_file.as_deref());

        Ok(cfg)
    }

    fn anchor_catalog_path(&mut self, config_file: &Path, from_file: Option<&Path>) {
        let Some(current) = self.catalog.path.as_mut() else {
            return;
        };
        if current.is_absolute() || from_file != Some(current.as_path()) {
            return;
        }
        if let Some(dir) = config_file.parent() {
            *current = dir.join(&*current);
            debug!(path = %current.display(), "catalog path resolved against config file");
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.folio.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "folio", "folio")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".folio.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_use_builtin_catalog() {
        let cfg = AppConfig::default();
        assert!(cfg.catalog.path.is_none());
        assert_eq!(cfg.output.format, OutputFormat::Auto);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let cfg = AppConfig::load_from(Path::new("/nonexistent/folio/config.toml"), false).unwrap();
        assert_eq!(cfg.output, OutputConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        let path = PathBuf::from("/nonexistent/folio/config.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[catalog]\npath = \"/srv/site/projects.json\"\n\n[output]\nno_color = true\nformat = \"json\""
        )
        .unwrap();

        let cfg = AppConfig::load_from(file.path(), true).unwrap();
        assert_eq!(cfg.catalog.path, Some(PathBuf::from("/srv/site/projects.json")));
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn relative_catalog_path_follows_the_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog]\npath = \"data/projects.json\"\n").unwrap();

        let cfg = AppConfig::load_from(&path, true).unwrap();
        assert_eq!(cfg.catalog.path, Some(dir.path().join("data/projects.json")));
    }

    #[test]
    fn anchoring_skips_paths_not_written_in_the_file() {
        let mut cfg = AppConfig::default();
        cfg.catalog.path = Some(PathBuf::from("env/projects.json"));
        cfg.anchor_catalog_path(Path::new("/etc/folio/config.toml"), None);
        assert_eq!(cfg.catalog.path, Some(PathBuf::from("env/projects.json")));

        cfg.anchor_catalog_path(
            Path::new("/etc/folio/config.toml"),
            Some(Path::new("env/projects.json")),
        );
        assert_eq!(
            cfg.catalog.path,
            Some(PathBuf::from("/etc/folio/env/projects.json"))
        );
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\nformat = \"yaml\"").unwrap();
        assert!(AppConfig::load_from(file.path(), true).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
