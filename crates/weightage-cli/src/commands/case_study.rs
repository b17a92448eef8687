//! Case study command implementation.
//!
//! Shows one constituent's required % change for a set of point moves.

use anyhow::Result;
use clap::Args;
use weightage_core::{build_case_study, format_fixed, scenario_label, Selector};

use super::Session;
use crate::cli::OutputFormat;
use crate::output::{print_json, print_output, KeyValue};

/// Arguments for the case-study command.
#[derive(Args, Debug)]
pub struct CaseStudyArgs {
    /// Constituent name or name fragment. The first match in registry order wins.
    pub selector: String,

    /// Point moves to show (comma separated). Defaults to the rising scenarios.
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub points: Option<Vec<i64>>,

    /// Require an exact name match
    #[arg(long, conflicts_with = "case_sensitive")]
    pub exact: bool,

    /// Match the fragment case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,
}

impl CaseStudyArgs {
    fn selector(&self) -> Selector {
        if self.exact {
            Selector::exact(&self.selector)
        } else if self.case_sensitive {
            Selector::contains(&self.selector)
        } else {
            Selector::contains_ignore_case(&self.selector)
        }
    }
}

/// Execute the case-study command.
pub fn execute(args: CaseStudyArgs, session: &Session, format: OutputFormat) -> Result<()> {
    let points = match &args.points {
        Some(points) => points.clone(),
        None => session.scenarios.positive().points().to_vec(),
    };

    let study = build_case_study(
        session.registry.records(),
        &args.selector(),
        session.context.level,
        &points,
    )?;
    let precision = session.config.display_precision;

    match format {
        OutputFormat::Table => {
            let mut rows = vec![
                KeyValue::new("Constituent", study.name.clone()),
                KeyValue::new("Weight %", format_fixed(study.weight_pct, precision)),
            ];
            rows.extend(
                study
                    .values
                    .iter()
                    .map(|v| KeyValue::new(scenario_label(v.points), format_fixed(v.required_pct, precision))),
            );
            session.header("case study");
            print_output(&rows, format)?;
        }
        OutputFormat::Json => {
            print_json(&study.rounded(precision))?;
        }
        OutputFormat::Csv => {
            let map = study.rounded(precision).to_map();
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(map.keys())?;
            wtr.write_record(map.values().map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            }))?;
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            let values: Vec<String> = study
                .values
                .iter()
                .map(|v| format_fixed(v.required_pct, precision))
                .collect();
            println!("{}", values.join(","));
        }
    }

    Ok(())
}
