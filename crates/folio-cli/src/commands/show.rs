//! Implementation of the `folio show` command.

use tracing::instrument;

use folio_core::{application::CatalogService, domain::ProjectEntry};

use crate::{
    cli::{GlobalArgs, OutputFormat, ShowArgs},
    commands::open_source,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(
    args: ShowArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let source = open_source(&global, &config)?;
    let service = CatalogService::from_source(source.as_ref())?;

    let matches = select(&service, &args.project)?;

    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&matches)
            .map_err(std::io::Error::from)
            .with_cli_context(|| "serialising project as JSON")?;
        output.data(&json)?;
        return Ok(());
    }

    for (i, project) in matches.iter().enumerate() {
        if i > 0 {
            output.print("")?;
        }
        print_entry(project, &output)?;
    }
    Ok(())
}

/// An all-digit query is an index; anything else is a title.
fn select<'a>(service: &'a CatalogService, query: &str) -> CliResult<Vec<&'a ProjectEntry>> {
    match query.trim().parse::<usize>() {
        Ok(index) => Ok(vec![service.get(index)?]),
        Err(_) => Ok(service.find_by_title(query)?),
    }
}

fn print_entry(project: &ProjectEntry, output: &OutputManager) -> CliResult<()> {
    let none = || output.muted("(none)");

    output.header(project.title())?;
    output.print(&format!("  Description: {}", project.description()))?;
    output.print(&format!(
        "  Link:        {}",
        project.href().map(|h| h.to_string()).unwrap_or_else(none)
    ))?;
    output.print(&format!(
        "  Image:       {}",
        project.img_src().map(|s| s.to_string()).unwrap_or_else(none)
    ))?;
    Ok(())
}
