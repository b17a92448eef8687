//! # Weightage Core
//!
//! Index constituent impact analytics.
//!
//! For each member of a weighted index, computes the percentage price move
//! that member alone would need to move the index by a given number of
//! points, assuming every other member is unchanged.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Injectable data**: Constituent lists and index levels are parameters,
//!   never module-level state
//! - **Unrounded results**: Rounding is a display concern handled by [`export`]
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust
//! use weightage_core::prelude::*;
//!
//! let registry = ConstituentRegistry::load(nifty50::constituents())?;
//! let scenarios = nifty50::default_scenarios();
//!
//! let table = compute_impact_table(registry.records(), nifty50::INDEX_LEVEL, &scenarios)?;
//! assert_eq!(table.len(), 50);
//! assert_eq!(table.column_count(), 3 + scenarios.len());
//!
//! let infosys = build_case_study(
//!     registry.records(),
//!     &Selector::contains("INFOSYS"),
//!     nifty50::INDEX_LEVEL,
//!     scenarios.positive().points(),
//! )?;
//! assert_eq!(infosys.name, "INFOSYS LTD");
//!
//! let csv = to_csv_string(&table, 2)?;
//! assert!(csv.starts_with("name,sector,weight_pct,"));
//! # Ok::<(), weightage_core::ImpactError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`registry`] - Constituent registry, sector breakdown, NIFTY 50 dataset
//! - [`calculator`] - Impact formula, batch tables, case studies
//! - [`export`] - Display rounding and CSV export
//! - [`types`] - Core types (ConstituentRecord, ScenarioSet, IndexContext, ImpactConfig)
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large constituent lists

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod calculator;
pub mod error;
pub mod export;
pub mod registry;
pub mod types;

pub use error::{ImpactError, ImpactResult};

pub use types::{
    parse_scenario_label, scenario_label, validate_index_level, ConstituentRecord, ImpactConfig,
    IndexContext, ScenarioSet,
};

pub use registry::{nifty50, sector_breakdown, ConstituentRegistry, SectorBreakdown, SectorBucket};

pub use calculator::{
    build_case_study, compute_impact_table, compute_impact_table_with_config, required_pct_change,
    CaseStudyRecord, CaseStudyValue, ImpactRow, ImpactTable, Selector, BASE_COLUMNS,
};

pub use export::{
    format_fixed, parse_csv, round_display, to_csv_string, write_csv, ParsedRow, ParsedTable,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use weightage_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ImpactError, ImpactResult};

    pub use crate::types::{ConstituentRecord, ImpactConfig, IndexContext, ScenarioSet};

    pub use crate::registry::{nifty50, sector_breakdown, ConstituentRegistry, SectorBreakdown};

    pub use crate::calculator::{
        build_case_study, compute_impact_table, compute_impact_table_with_config,
        required_pct_change, CaseStudyRecord, ImpactRow, ImpactTable, Selector,
    };

    pub use crate::export::{format_fixed, parse_csv, round_display, to_csv_string, write_csv};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        let err = ImpactError::InvalidIndexLevel { level: 0.0 };
        assert!(err.to_string().contains("positive"));
    }
}
