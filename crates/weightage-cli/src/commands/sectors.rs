//! Sectors command implementation.
//!
//! Groups the constituents by sector and shows each sector's index weight.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use weightage_core::{format_fixed, sector_breakdown};

use super::Session;
use crate::cli::OutputFormat;
use crate::output::{print_grid, print_output};

/// Arguments for the sectors command.
#[derive(Args, Debug)]
pub struct SectorsArgs {
    /// List the member constituents of each sector
    #[arg(long)]
    pub members: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct SectorRow {
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Weight %")]
    weight_pct: String,
    #[tabled(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    members: Option<String>,
}

/// Execute the sectors command.
pub fn execute(args: SectorsArgs, session: &Session, format: OutputFormat) -> Result<()> {
    let breakdown = sector_breakdown(session.registry.records());
    let precision = session.config.display_precision;

    let rows: Vec<SectorRow> = breakdown
        .buckets
        .iter()
        .map(|b| SectorRow {
            sector: b.sector.clone(),
            count: b.count,
            weight_pct: format_fixed(b.weight_pct, precision),
            members: args.members.then(|| b.members.join("; ")),
        })
        .collect();

    if format != OutputFormat::Table {
        return print_output(&rows, format);
    }

    session.header(&format!(
        "{} constituents in {} sectors, {}% total weight",
        session.registry.len(),
        breakdown.len(),
        format_fixed(breakdown.total_weight_pct, precision)
    ));

    let mut headers = vec!["Sector".to_string(), "Count".to_string(), "Weight %".to_string()];
    if args.members {
        headers.push("Members".to_string());
    }
    let grid: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| {
            let mut cells = vec![row.sector, row.count.to_string(), row.weight_pct];
            cells.extend(row.members);
            cells
        })
        .collect();
    print_grid(&headers, &grid);
    Ok(())
}
