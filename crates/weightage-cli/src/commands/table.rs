//! Table command implementation.
//!
//! Computes the required % change for every constituent and scenario.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use weightage_core::{compute_impact_table_with_config, format_fixed, write_csv, ImpactTable};

use super::Session;
use crate::cli::OutputFormat;
use crate::output::{print_grid, print_json, print_success};

/// Arguments for the table command.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Also write the full table as CSV to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the table command.
pub fn execute(args: TableArgs, session: &Session, format: OutputFormat) -> Result<()> {
    let table = compute_impact_table_with_config(
        session.registry.records(),
        session.context.level,
        &session.scenarios,
        &session.config,
    )?;
    let precision = session.config.display_precision;

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("Cannot create {}", path.display()))?;
        write_csv(&table, BufWriter::new(file), precision)?;
        if !session.quiet {
            print_success(&format!(
                "Wrote {} rows x {} columns to {}",
                table.len(),
                table.column_count(),
                path.display()
            ));
        }
        return Ok(());
    }

    render(&table, session, format, "required % change per constituent")
}

/// Prints an impact table in the requested format.
pub fn render(
    table: &ImpactTable,
    session: &Session,
    format: OutputFormat,
    subtitle: &str,
) -> Result<()> {
    let precision = session.config.display_precision;
    match format {
        OutputFormat::Table => {
            session.header(subtitle);
            let rows: Vec<Vec<String>> = table
                .rows()
                .iter()
                .map(|row| {
                    [
                        row.constituent.name.clone(),
                        row.constituent.sector.clone(),
                        format_fixed(row.constituent.weight_pct, precision),
                    ]
                    .into_iter()
                    .chain(row.required_pct.iter().map(|v| format_fixed(*v, precision)))
                    .collect()
                })
                .collect();
            print_grid(&table.column_names(), &rows);
        }
        OutputFormat::Json => {
            let rows: Vec<Value> = table
                .rows()
                .iter()
                .map(|row| Value::Object(row.to_flat_map(table.scenarios(), Some(precision))))
                .collect();
            print_json(&rows)?;
        }
        OutputFormat::Csv => {
            write_csv(table, std::io::stdout(), precision)?;
        }
        OutputFormat::Minimal => {
            for row in table.rows() {
                let values: Vec<String> = row
                    .required_pct
                    .iter()
                    .map(|v| format_fixed(*v, precision))
                    .collect();
                println!("{}\t{}", row.name(), values.join("\t"));
            }
        }
    }

    Ok(())
}
