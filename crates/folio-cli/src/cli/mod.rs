//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No catalog logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use folio_adapters::CatalogFormat;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "folio",
    bin_name = "folio",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Inspect, validate and export the portfolio project catalog",
    long_about = "Folio works with the ordered list of portfolio projects \
                  (title, description, optional link, optional image) that \
                  a website renders.",
    after_help = "EXAMPLES:\n\
        \x20 folio list\n\
        \x20 folio show 0\n\
        \x20 folio --file projects.toml validate\n\
        \x20 folio export --format json --output projects.json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List projects in display order.
    #[command(
        visible_alias = "ls",
        about = "List projects",
        after_help = "EXAMPLES:\n\
            \x20 folio list\n\
            \x20 folio list --linked\n\
            \x20 folio list --format csv"
    )]
    List(ListArgs),

    /// Show a single project.
    #[command(
        about = "Show one project by index or title",
        after_help = "EXAMPLES:\n\
            \x20 folio show 0\n\
            \x20 folio show \"大圍棋教室\""
    )]
    Show(ShowArgs),

    /// Check every project against the catalog rules.
    #[command(
        about = "Validate the catalog",
        after_help = "EXAMPLES:\n\
            \x20 folio validate\n\
            \x20 folio --file projects.json validate"
    )]
    Validate,

    /// Write the catalog as JSON or TOML.
    #[command(
        about = "Export the catalog",
        after_help = "EXAMPLES:\n\
            \x20 folio export\n\
            \x20 folio export --format toml --output projects.toml"
    )]
    Export(ExportArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 folio completions bash > ~/.local/share/bash-completion/completions/folio\n\
            \x20 folio completions zsh  > ~/.zfunc/_folio\n\
            \x20 folio completions fish > ~/.config/fish/completions/folio.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Folio configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 folio config get catalog.path\n\
            \x20 folio config list\n\
            \x20 folio config path"
    )]
    Config(ConfigCommands),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `folio list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only projects that have a link.
    #[arg(long = "linked", help = "Only show projects with an href")]
    pub linked: bool,

    /// Only projects that have a preview image.
    #[arg(long = "with-images", help = "Only show projects with an imgSrc")]
    pub with_images: bool,

    /// Output format.  Defaults to `json` under `--output-format json`,
    /// otherwise `table`.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One title per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `folio show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// 0-based index, or a title (case-insensitive).
    #[arg(value_name = "INDEX|TITLE", help = "Project index or title")]
    pub project: String,
}

// ── export ────────────────────────────────────────────────────────────────────

/// Arguments for `folio export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// File format.  Inferred from `--output` when omitted, else JSON.
    #[arg(long = "format", value_enum, help = "Export format")]
    pub format: Option<ExportFormat>,

    /// Destination file; stdout when omitted.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Write to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// Overwrite an existing destination file.
    #[arg(long = "force", help = "Overwrite an existing file")]
    pub force: bool,
}

/// Export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Toml,
}

impl From<ExportFormat> for CatalogFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => CatalogFormat::Json,
            ExportFormat::Toml => CatalogFormat::Toml,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `folio completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `folio config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `catalog.path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
