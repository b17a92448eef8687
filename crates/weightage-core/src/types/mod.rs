//! Core types for impact analytics.
//!
//! This module contains the fundamental types:
//! - [`ConstituentRecord`] - One index member with its weight and sector
//! - [`ScenarioSet`] - Ordered point-move scenarios
//! - [`IndexContext`] - Current index level
//! - [`ImpactConfig`] - Computation configuration

mod config;
mod constituent;
mod context;
mod scenario;

pub use config::ImpactConfig;
pub use constituent::ConstituentRecord;
pub use context::{validate_index_level, IndexContext};
pub use scenario::{parse_scenario_label, scenario_label, ScenarioSet};
