//! CLI command implementations.

pub mod case_study;
pub mod headline;
pub mod sectors;
pub mod table;

pub use case_study::CaseStudyArgs;
pub use headline::HeadlineArgs;
pub use sectors::SectorsArgs;
pub use table::TableArgs;

use std::fs::File;

use anyhow::{Context, Result};
use tracing::info;
use weightage_core::{nifty50, ConstituentRegistry, ImpactConfig, IndexContext, ScenarioSet};

use crate::cli::Cli;
use crate::output::print_header;
use crate::settings::RunFile;

/// Inputs shared by every command, resolved from flags, run file and defaults.
pub struct Session {
    /// Constituents to analyse.
    pub registry: ConstituentRegistry,
    /// Index level and name.
    pub context: IndexContext,
    /// Point moves.
    pub scenarios: ScenarioSet,
    /// Analytics settings.
    pub config: ImpactConfig,
    /// Skip section headers and status lines.
    pub quiet: bool,
}

impl Session {
    /// Resolves the session: flags first, then the run file, then the
    /// built-in NIFTY 50 defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                info!(path = %path.display(), "loading run file");
                RunFile::from_file(path)?
            }
            None => RunFile::default(),
        };
        let config = file.analytics;

        let constituents = cli.constituents.clone().or(file.constituents);
        let (registry, default_name) = match &constituents {
            Some(path) => {
                let reader = File::open(path)
                    .with_context(|| format!("Cannot open constituents file {}", path.display()))?;
                let registry = ConstituentRegistry::from_csv_reader(reader, &config)
                    .with_context(|| format!("Cannot load constituents from {}", path.display()))?;
                (registry, None)
            }
            None => (
                ConstituentRegistry::load_with_config(nifty50::constituents(), &config)?,
                Some(nifty50::INDEX_NAME.to_string()),
            ),
        };

        let level = cli
            .index_level
            .or(file.index_level)
            .unwrap_or(nifty50::INDEX_LEVEL);
        let mut context = IndexContext::new(level)?;
        if let Some(name) = file.index_name.or(default_name) {
            context = context.with_name(name);
        }

        let scenarios = cli
            .scenarios
            .clone()
            .or(file.scenarios)
            .map(ScenarioSet::from)
            .unwrap_or_else(nifty50::default_scenarios);

        Ok(Self {
            registry,
            context,
            scenarios,
            config,
            quiet: cli.quiet,
        })
    }

    /// Title prefix for table output, e.g. "NIFTY 50 @ 25509.70".
    pub fn title(&self) -> String {
        match &self.context.name {
            Some(name) => format!("{} @ {:.2}", name, self.context.level),
            None => format!("Index @ {:.2}", self.context.level),
        }
    }

    /// Prints a section header unless running quietly.
    pub fn header(&self, subtitle: &str) {
        if !self.quiet {
            print_header(&format!("{}: {}", self.title(), subtitle));
        }
    }
}
