//! Implementation of the `folio validate` command.
//!
//! A catalog file is read record by record so that every bad entry is
//! reported, not only the first one a normal load would stop at.

use tracing::{info, instrument};

use folio_adapters::BuiltinSource;
use folio_core::{
    application::ports::ProjectSource,
    domain::{DomainError, DomainValidator, ProjectCatalog, ProjectEntry},
};

use crate::{
    cli::GlobalArgs,
    commands::catalog_file,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (origin, checked) = match catalog_file(&global, &config)? {
        Some(file) => {
            let checked = file
                .load_records()?
                .into_iter()
                .map(ProjectEntry::try_from)
                .collect();
            (file.describe(), checked)
        }
        None => {
            let source = BuiltinSource::new();
            let checked = source
                .load()?
                .iter()
                .map(|entry| DomainValidator::validate_entry(entry).map(|()| entry.clone()))
                .collect();
            (source.describe(), checked)
        }
    };

    let report = check(checked);

    for title in &report.duplicates {
        output.warning(&format!("duplicate title: {title}"))?;
    }
    for (index, message) in &report.problems {
        output.error(&format!("project #{index}: {message}"))?;
    }

    if report.problems.is_empty() {
        info!(count = report.total, "catalog valid");
        output.success(&format!(
            "{} project(s) in {origin} are valid",
            report.total
        ))?;
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            invalid: report.problems.len(),
            total: report.total,
        })
    }
}

#[derive(Debug, Default)]
struct Report {
    total: usize,
    problems: Vec<(usize, String)>,
    duplicates: Vec<String>,
}

/// Split per-entry outcomes into problems, keeping the valid entries for the
/// duplicate-title scan.
fn check(checked: Vec<Result<ProjectEntry, DomainError>>) -> Report {
    let total = checked.len();
    let mut problems = Vec::new();
    let mut valid = Vec::with_capacity(total);

    for (index, outcome) in checked.into_iter().enumerate() {
        match outcome {
            Ok(entry) => valid.push(entry),
            Err(e) => problems.push((index, e.to_string())),
        }
    }

    let duplicates = ProjectCatalog::from(valid)
        .duplicate_titles()
        .into_iter()
        .map(str::to_owned)
        .collect();

    Report {
        total,
        problems,
        duplicates,
    }
}
