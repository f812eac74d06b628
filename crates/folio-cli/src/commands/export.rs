//! Implementation of the `folio export` command.

use std::{fs, path::Path};

use tracing::{info, instrument};

use folio_adapters::CatalogFormat;
use folio_core::{application::CatalogService, error::FolioError};

use crate::{
    cli::{ExportArgs, GlobalArgs},
    commands::open_source,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: ExportArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let format = resolve_format(&args)?;

    let source = open_source(&global, &config)?;
    let service = CatalogService::from_source(source.as_ref())?;

    let rendered = format
        .render(service.catalog())
        .map_err(FolioError::from)?;

    match &args.output {
        None => output.data(rendered.trim_end())?,
        Some(path) => {
            write_file(path, &rendered, args.force)?;
            info!(path = %path.display(), %format, "catalog exported");
            output.success(&format!(
                "Exported {} project(s) to {}",
                service.len(),
                path.display()
            ))?;
        }
    }

    Ok(())
}

/// Explicit `--format`, else the `--output` extension, else JSON.
fn resolve_format(args: &ExportArgs) -> CliResult<CatalogFormat> {
    if let Some(format) = args.format {
        return Ok(format.into());
    }
    match &args.output {
        Some(path) => CatalogFormat::from_path(path).map_err(|e| CliError::InvalidInput {
            message: format!(
                "cannot infer export format from '{}'; pass --format",
                path.display()
            ),
            source: Some(Box::new(e)),
        }),
        None => Ok(CatalogFormat::Json),
    }
}

fn write_file(path: &Path, content: &str, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    fs::write(path, content).with_cli_context(|| format!("writing {}", path.display()))
}
