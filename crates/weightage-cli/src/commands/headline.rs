//! Headline command implementation.
//!
//! Shows name, sector and weight with the rising scenarios only.

use anyhow::Result;
use clap::Args;
use weightage_core::compute_impact_table_with_config;

use super::table::render;
use super::Session;
use crate::cli::OutputFormat;
use crate::error::CliError;

/// Arguments for the headline command.
#[derive(Args, Debug)]
pub struct HeadlineArgs {
    /// Show falling scenarios instead of rising ones
    #[arg(long)]
    pub falling: bool,
}

/// Execute the headline command.
pub fn execute(args: HeadlineArgs, session: &Session, format: OutputFormat) -> Result<()> {
    let (subset, direction) = if args.falling {
        (session.scenarios.negative(), "fall")
    } else {
        (session.scenarios.positive(), "rise")
    };
    if subset.is_empty() {
        return Err(CliError::NoScenarios(format!("no index {direction} among the scenarios")).into());
    }

    let table = compute_impact_table_with_config(
        session.registry.records(),
        session.context.level,
        &session.scenarios,
        &session.config,
    )?
    .select(subset.points())?;

    render(
        &table,
        session,
        format,
        &format!("required % change for an index {direction}"),
    )
}
