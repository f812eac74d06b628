//! Implementation of the `folio list` command.

use owo_colors::OwoColorize;
use tracing::instrument;

use folio_core::{application::CatalogService, domain::ProjectEntry};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat, OutputFormat},
    commands::open_source,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let source = open_source(&global, &config)?;
    let service = CatalogService::from_source(source.as_ref())?;

    let projects: Vec<(usize, &ProjectEntry)> = service
        .projects()
        .iter()
        .enumerate()
        .filter(|(_, p)| !args.linked || p.is_linked())
        .filter(|(_, p)| !args.with_images || p.has_image())
        .collect();

    let format = args.format.unwrap_or(match output.format() {
        OutputFormat::Json => ListFormat::Json,
        _ => ListFormat::Table,
    });

    match format {
        ListFormat::Table => {
            output.header(&format!("Projects ({}):", service.origin()))?;
            if projects.is_empty() {
                output.print("  (no projects)")?;
            }
            for (index, project) in &projects {
                output.print(&table_row(*index, project, &output))?;
            }
        }

        ListFormat::List => {
            for (_, project) in &projects {
                output.data(project.title())?;
            }
        }

        ListFormat::Json => {
            let entries: Vec<&ProjectEntry> = projects.iter().map(|(_, p)| *p).collect();
            let json = serde_json::to_string_pretty(&entries)
                .map_err(std::io::Error::from)
                .with_cli_context(|| "serialising projects as JSON")?;
            output.data(&json)?;
        }

        ListFormat::Csv => {
            output.data("title,description,href,imgSrc")?;
            for (_, project) in &projects {
                output.data(&csv_row(project))?;
            }
        }
    }

    Ok(())
}

fn table_row(index: usize, project: &ProjectEntry, output: &OutputManager) -> String {
    let link = project
        .href()
        .map(|h| h.to_string())
        .unwrap_or_else(|| output.muted("(no link)"));
    let title = if output.supports_color() {
        project.title().bold().to_string()
    } else {
        project.title().to_owned()
    };
    format!("  {index:>3}. {title}  {link}")
}

fn csv_row(project: &ProjectEntry) -> String {
    [
        project.title(),
        project.description(),
        project.href().map(|h| h.as_str()).unwrap_or(""),
        project.img_src().map(|s| s.as_str()).unwrap_or(""),
    ]
    .iter()
    .map(|field| csv_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
