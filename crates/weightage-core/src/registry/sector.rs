//! Sector-based constituent bucketing.
//!
//! Provides the distribution of index weight by sector.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::ConstituentRecord;

/// Aggregated figures for the constituents of one sector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorBucket {
    /// Sector label as given in the records.
    pub sector: String,

    /// Number of constituents in this sector.
    pub count: usize,

    /// Summed index weight in percent.
    pub weight_pct: f64,

    /// Constituent names in registry order.
    pub members: Vec<String>,
}

/// Distribution of index weight by sector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorBreakdown {
    /// Buckets sorted by weight descending, ties broken by sector name.
    pub buckets: Vec<SectorBucket>,

    /// Total weight across all buckets.
    pub total_weight_pct: f64,
}

impl SectorBreakdown {
    /// Returns the bucket for a sector.
    #[must_use]
    pub fn get(&self, sector: &str) -> Option<&SectorBucket> {
        self.buckets.iter().find(|b| b.sector == sector)
    }

    /// Number of distinct sectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if there are no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Buckets constituents by their sector label.
///
/// Labels are compared exactly; "IT" and "it" are separate sectors.
#[must_use]
pub fn sector_breakdown(records: &[ConstituentRecord]) -> SectorBreakdown {
    let mut grouped: HashMap<&str, SectorBucket> = HashMap::new();
    for record in records {
        let bucket = grouped
            .entry(record.sector.as_str())
            .or_insert_with(|| SectorBucket {
                sector: record.sector.clone(),
                ..SectorBucket::default()
            });
        bucket.count += 1;
        bucket.weight_pct += record.weight_pct;
        bucket.members.push(record.name.clone());
    }

    let mut buckets: Vec<SectorBucket> = grouped.into_values().collect();
    buckets.sort_by(|a, b| {
        b.weight_pct
            .partial_cmp(&a.weight_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.sector.cmp(&b.sector))
    });

    SectorBreakdown {
        total_weight_pct: buckets.iter().map(|b| b.weight_pct).sum(),
        buckets,
    }
}
