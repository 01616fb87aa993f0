use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `pathex` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pathex",
    version,
    about = "Export pathology catalog studies into self-describing directory archives"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (warnings and errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered over .pathex/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Export one study into a directory archive.
    Export(ExportArgs),
    /// List catalog tables.
    Tables,
    /// Show a table's columns and first row.
    Peek(PeekArgs),
}

/// Arguments for `pathex export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Exact study (course) name to export.
    #[arg(short, long)]
    pub study: String,
    /// Root of the archive tree (defaults to export.base_dir).
    #[arg(short, long)]
    pub base_dir: Option<String>,
}

/// Arguments for `pathex peek`.
#[derive(Clone, Debug, Args)]
pub struct PeekArgs {
    /// Table name as listed by `pathex tables`.
    pub table: String,
}
