//! Constituent registry and reference datasets.
//!
//! - [`ConstituentRegistry`] - Validated, ordered constituent list
//! - [`sector_breakdown`] - Index weight by sector
//! - [`nifty50`] - Built-in NIFTY 50 dataset

pub mod nifty50;
#[allow(clippy::module_inception)]
mod registry;
mod sector;

pub use registry::ConstituentRegistry;
pub use sector::{sector_breakdown, SectorBreakdown, SectorBucket};
