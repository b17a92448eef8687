//! Weightage CLI - Index constituent impact analytics.
//!
//! # Usage
//!
//! ```bash
//! # Full impact table for the built-in NIFTY 50 dataset
//! weightage table
//!
//! # Save the table as CSV
//! weightage table --output nifty50_analysis.csv
//!
//! # Rising scenarios only
//! weightage headline
//!
//! # Case study for one constituent
//! weightage case-study infosys --points 100,200,250,500
//!
//! # Weight by sector, from a custom constituents file
//! weightage --constituents sensex.csv --index-level 81000 sectors
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let format = cli.format;
    let session = Session::from_cli(&cli)?;
    debug!(
        constituents = session.registry.len(),
        index_level = session.context.level,
        scenarios = ?session.scenarios.points(),
        "session ready"
    );

    match cli.command {
        Commands::Table(args) => commands::table::execute(args, &session, format)?,
        Commands::Headline(args) => commands::headline::execute(args, &session, format)?,
        Commands::CaseStudy(args) => commands::case_study::execute(args, &session, format)?,
        Commands::Sectors(args) => commands::sectors::execute(args, &session, format)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for CSV and JSON output.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = match (quiet, verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        (false, 1) => EnvFilter::new("info"),
        (false, _) => EnvFilter::new("debug"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
