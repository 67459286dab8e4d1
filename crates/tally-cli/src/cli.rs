//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AbcArgs, ConfigArgs, LorenzArgs, SolvencyArgs};

/// Tally - inventory ABC analysis, Lorenz curves and solvency scoring
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the `default_format` setting)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Display language code (defaults to the `language` setting)
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// TOML file overriding individual display strings
    #[arg(long, global = true, value_name = "FILE")]
    pub strings: Option<PathBuf>,

    /// Settings file location
    #[arg(long, global = true, env = "TALLY_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify line items into A/B/C categories by cumulative cost
    Abc(AbcArgs),

    /// Compute Lorenz curve coordinates for line item costs
    Lorenz(LorenzArgs),

    /// Score solvency from balance-sheet figures
    Solvency(SolvencyArgs),

    /// Manage settings
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the key values)
    Minimal,
}

/// Cost ordering for item tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortArg {
    /// Cheapest first
    Asc,
    /// Most expensive first
    #[default]
    Desc,
}

impl From<SortArg> for tally_core::types::SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => Self::Ascending,
            SortArg::Desc => Self::Descending,
        }
    }
}
