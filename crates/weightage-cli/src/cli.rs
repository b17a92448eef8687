//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{CaseStudyArgs, HeadlineArgs, SectorsArgs, TableArgs};

/// Weightage - How far each index constituent must move to shift the index
#[derive(Parser)]
#[command(name = "weightage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Current index level. Defaults to the NIFTY 50 reference level.
    #[arg(long, global = true, env = "WEIGHTAGE_INDEX_LEVEL", allow_negative_numbers = true)]
    pub index_level: Option<f64>,

    /// Point moves to evaluate, comma separated (e.g. 100,-100,250)
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub scenarios: Option<Vec<i64>>,

    /// Constituents CSV with a name,weight_pct,sector header.
    /// Defaults to the built-in NIFTY 50 list.
    #[arg(long, global = true)]
    pub constituents: Option<PathBuf>,

    /// TOML run file with index level, scenarios and analytics settings
    #[arg(long, global = true, env = "WEIGHTAGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Required % change for every constituent and scenario
    Table(TableArgs),

    /// Required % change for rising scenarios only
    Headline(HeadlineArgs),

    /// Focused view of a single constituent
    CaseStudy(CaseStudyArgs),

    /// Index weight by sector
    Sectors(SectorsArgs),
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
    /// Minimal output (just the values)
    Minimal,
}
