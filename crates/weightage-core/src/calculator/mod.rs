//! Impact calculator.
//!
//! This module provides:
//! - The weight-to-impact formula ([`required_pct_change`])
//! - Batch tables across constituents and scenarios ([`compute_impact_table`])
//! - Single-constituent case studies ([`build_case_study`])
//!
//! All functions are pure: inputs are explicit and nothing is cached.

mod case_study;
mod impact;
mod parallel;
mod table;

pub use case_study::*;
pub use impact::required_pct_change;
pub use table::*;
