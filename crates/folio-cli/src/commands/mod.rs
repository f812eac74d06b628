//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod export;
pub mod list;
pub mod show;
pub mod validate;

use std::path::PathBuf;

use tracing::debug;

use folio_adapters::{BuiltinSource, CatalogFormat, FileSource};
use folio_core::{application::ports::ProjectSource, error::FolioError};

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// Pick the catalog source: `--file`, then `catalog.path` from config, then
/// the built-in catalog.
pub fn open_source(global: &GlobalArgs, config: &AppConfig) -> CliResult<Box<dyn ProjectSource>> {
    match catalog_file(global, config)? {
        Some(file) => Ok(Box::new(file)),
        None => {
            debug!("no catalog file configured, using built-in catalog");
            Ok(Box::new(BuiltinSource::new()))
        }
    }
}

/// The catalog file selected by `--file` or `catalog.path`, if any.
pub fn catalog_file(global: &GlobalArgs, config: &AppConfig) -> CliResult<Option<FileSource>> {
    let path: Option<PathBuf> = global.file.clone().or_else(|| config.catalog.path.clone());
    let Some(path) = path else {
        return Ok(None);
    };

    let source = match config.catalog.format.as_deref() {
        Some(format) => {
            let format: CatalogFormat = format.parse().map_err(FolioError::from)?;
            FileSource::with_format(path, format)
        }
        None => FileSource::new(path).map_err(FolioError::from)?,
    };
    debug!(path = %source.path().display(), format = %source.format(), "using catalog file");
    Ok(Some(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn global(file: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            file: file.map(PathBuf::from),
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn defaults_to_builtin() {
        let source = open_source(&global(None), &AppConfig::default()).unwrap();
        assert_eq!(source.describe(), "built-in");
    }

    #[test]
    fn flag_beats_config() {
        let mut config = AppConfig::default();
        config.catalog.path = Some(PathBuf::from("from-config.json"));

        let source = open_source(&global(Some("from-flag.toml")), &config).unwrap();
        assert_eq!(source.describe(), "from-flag.toml");

        let source = open_source(&global(None), &config).unwrap();
        assert_eq!(source.describe(), "from-config.json");
    }

    #[test]
    fn configured_format_overrides_extension() {
        let mut config = AppConfig::default();
        config.catalog.format = Some("toml".into());
        assert!(open_source(&global(Some("projects.txt")), &config).is_ok());

        config.catalog.format = Some("yaml".into());
        assert!(open_source(&global(Some("projects.txt")), &config).is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(open_source(&global(Some("projects.yaml")), &AppConfig::default()).is_err());
    }
}
