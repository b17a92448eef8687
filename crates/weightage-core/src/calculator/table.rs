//! Batch impact tables.
//!
//! Applies the impact formula across every constituent and every scenario.
//! Rows are independent of each other, so the batch is a plain map over the
//! records with no shared accumulator.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::case_study::{CaseStudyRecord, CaseStudyValue, Selector};
use super::impact::pct_change_unchecked;
use super::parallel::maybe_parallel_try_map;
use crate::error::{ImpactError, ImpactResult};
use crate::export::round_display;
use crate::types::{scenario_label, validate_index_level, ConstituentRecord, ImpactConfig, ScenarioSet};

/// Fixed leading columns of every impact table.
pub const BASE_COLUMNS: [&str; 3] = ["name", "sector", "weight_pct"];

/// One constituent with its required percentage change per scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactRow {
    /// The constituent this row was computed from.
    pub constituent: ConstituentRecord,

    /// Unrounded required % change, aligned with the table's scenarios.
    pub required_pct: Vec<f64>,
}

impl ImpactRow {
    /// Constituent name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.constituent.name
    }

    /// Flattens the row into `column -> value`, optionally rounding the
    /// numeric fields.
    #[must_use]
    pub fn to_flat_map(&self, scenarios: &ScenarioSet, precision: Option<u32>) -> Map<String, Value> {
        let round = |v: f64| precision.map_or(v, |p| round_display(v, p));

        let mut map = Map::new();
        map.insert(BASE_COLUMNS[0].into(), Value::from(self.constituent.name.clone()));
        map.insert(BASE_COLUMNS[1].into(), Value::from(self.constituent.sector.clone()));
        map.insert(BASE_COLUMNS[2].into(), Value::from(round(self.constituent.weight_pct)));
        for (points, value) in scenarios.iter().zip(&self.required_pct) {
            map.insert(scenario_label(points), Value::from(round(*value)));
        }
        map
    }
}

/// Impact of every scenario on every constituent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactTable {
    index_level: f64,
    scenarios: ScenarioSet,
    rows: Vec<ImpactRow>,
}

impl ImpactTable {
    /// Index level the table was computed at.
    #[must_use]
    pub fn index_level(&self) -> f64 {
        self.index_level
    }

    /// Scenario columns in order.
    #[must_use]
    pub fn scenarios(&self) -> &ScenarioSet {
        &self.scenarios
    }

    /// Rows in registry order.
    #[must_use]
    pub fn rows(&self) -> &[ImpactRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names: `name, sector, weight_pct`, then one per scenario.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        BASE_COLUMNS
            .iter()
            .map(|c| (*c).to_string())
            .chain(self.scenarios.labels())
            .collect()
    }

    /// Number of columns (`3 + scenarios`).
    #[must_use]
    pub fn column_count(&self) -> usize {
        BASE_COLUMNS.len() + self.scenarios.len()
    }

    /// Unrounded value for a constituent and scenario.
    ///
    /// Uses the first column for `points` when the scenario is repeated.
    #[must_use]
    pub fn required_pct(&self, name: &str, points: i64) -> Option<f64> {
        let column = self.scenarios.position(points)?;
        self.rows
            .iter()
            .find(|r| r.name() == name)
            .and_then(|r| r.required_pct.get(column).copied())
    }

    /// First row matching the selector, in registry order.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::NotFound`] if no row matches.
    pub fn find(&self, selector: &Selector) -> ImpactResult<&ImpactRow> {
        self.rows
            .iter()
            .find(|r| selector.matches(r.name()))
            .ok_or_else(|| ImpactError::not_found(selector.to_string()))
    }

    /// Projects the table onto a subset of its scenarios, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::ScenarioNotFound`] for a scenario that is not a
    /// column of this table.
    pub fn select(&self, points: &[i64]) -> ImpactResult<ImpactTable> {
        let columns = points
            .iter()
            .map(|&p| {
                self.scenarios
                    .position(p)
                    .ok_or(ImpactError::ScenarioNotFound { points: p })
            })
            .collect::<ImpactResult<Vec<usize>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| ImpactRow {
                constituent: row.constituent.clone(),
                required_pct: columns.iter().map(|&c| row.required_pct[c]).collect(),
            })
            .collect();

        Ok(ImpactTable {
            index_level: self.index_level,
            scenarios: ScenarioSet::from(points),
            rows,
        })
    }

    /// Case study for the first row matching `selector`.
    ///
    /// Scenarios already in the table are read from it; others are computed
    /// at the table's index level.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::NotFound`] if no row matches.
    pub fn case_study(&self, selector: &Selector, points: &[i64]) -> ImpactResult<CaseStudyRecord> {
        let row = self.find(selector)?;
        let weight_frac = row.constituent.weight_frac();

        let values = points
            .iter()
            .map(|&p| {
                let required_pct = match self.scenarios.position(p) {
                    Some(column) => row.required_pct[column],
                    None => pct_change_unchecked(p as f64, self.index_level, weight_frac),
                };
                CaseStudyValue {
                    points: p,
                    required_pct,
                }
            })
            .collect();

        Ok(CaseStudyRecord {
            name: row.constituent.name.clone(),
            weight_pct: row.constituent.weight_pct,
            values,
        })
    }
}

/// Computes the impact table with the default configuration.
///
/// # Errors
///
/// Returns [`ImpactError::InvalidIndexLevel`] for a non-positive level and
/// [`ImpactError::InvalidRecord`] naming the first malformed record.
pub fn compute_impact_table(
    records: &[ConstituentRecord],
    index_level: f64,
    scenarios: &ScenarioSet,
) -> ImpactResult<ImpactTable> {
    compute_impact_table_with_config(records, index_level, scenarios, &ImpactConfig::default())
}

/// Computes the impact table.
///
/// Every record is evaluated against every scenario exactly once. Any
/// malformed record fails the whole batch; no rows are skipped.
///
/// # Errors
///
/// See [`compute_impact_table`].
pub fn compute_impact_table_with_config(
    records: &[ConstituentRecord],
    index_level: f64,
    scenarios: &ScenarioSet,
    config: &ImpactConfig,
) -> ImpactResult<ImpactTable> {
    let index_level = validate_index_level(index_level)?;

    debug!(
        constituents = records.len(),
        scenarios = scenarios.len(),
        parallel = config.should_parallelize(records.len()),
        "computing impact table"
    );

    let indexed: Vec<(usize, &ConstituentRecord)> = records.iter().enumerate().collect();
    let rows = maybe_parallel_try_map(&indexed, config, |(position, record)| {
        compute_row(*position, record, index_level, scenarios)
    })?;

    Ok(ImpactTable {
        index_level,
        scenarios: scenarios.clone(),
        rows,
    })
}

fn compute_row(
    position: usize,
    record: &ConstituentRecord,
    index_level: f64,
    scenarios: &ScenarioSet,
) -> ImpactResult<ImpactRow> {
    record.validate().map_err(|err| {
        let name = if record.name.trim().is_empty() {
            format!("#{position}")
        } else {
            record.name.clone()
        };
        match err {
            ImpactError::Validation { reason, .. } => ImpactError::invalid_record(name, reason),
            other => other,
        }
    })?;

    let weight_frac = record.weight_frac();
    let required_pct = scenarios
        .iter()
        .map(|points| pct_change_unchecked(points as f64, index_level, weight_frac))
        .collect();

    Ok(ImpactRow {
        constituent: record.clone(),
        required_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn records() -> Vec<ConstituentRecord> {
        vec![
            ConstituentRecord::new("ALPHA LTD", 10.0, "IT"),
            ConstituentRecord::new("BETA LTD", 5.0, "Banking"),
            ConstituentRecord::new("ZERO LTD", 0.0, "Other"),
        ]
    }

    #[test]
    fn test_shape() {
        let scenarios = ScenarioSet::new([100, -100, 250]);
        let table = compute_impact_table(&records(), 20_000.0, &scenarios).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.column_count(), 6);
        assert_eq!(
            table.column_names(),
            vec![
                "name",
                "sector",
                "weight_pct",
                "required % change for +100 pts",
                "required % change for -100 pts",
                "required % change for +250 pts",
            ]
        );
        assert!(table.rows().iter().all(|r| r.required_pct.len() == 3));
    }

    #[test]
    fn test_values() {
        let scenarios = ScenarioSet::new([100, -100]);
        let table = compute_impact_table(&records(), 20_000.0, &scenarios).unwrap();

        // 100 / 20000 = 0.5% index move; 10% weight needs 5%.
        assert_relative_eq!(table.required_pct("ALPHA LTD", 100).unwrap(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(table.required_pct("BETA LTD", -100).unwrap(), -10.0, epsilon = 1e-12);
        assert_eq!(table.required_pct("ZERO LTD", 100), Some(0.0));
        assert_eq!(table.required_pct("ALPHA LTD", 999), None);
    }

    #[test]
    fn test_invalid_level_fails_even_when_empty() {
        let scenarios = ScenarioSet::new([100]);
        for level in [0.0, -1.0] {
            assert!(matches!(
                compute_impact_table(&[], level, &scenarios),
                Err(ImpactError::InvalidIndexLevel { .. })
            ));
        }
    }

    #[test]
    fn test_bad_record_fails_batch_with_name() {
        let mut data = records();
        data.push(ConstituentRecord::new("BROKEN LTD", -1.0, "IT"));
        let err = compute_impact_table(&data, 20_000.0, &ScenarioSet::new([100])).unwrap_err();
        match err {
            ImpactError::InvalidRecord { name, reason } => {
                assert_eq!(name, "BROKEN LTD");
                assert!(reason.contains("negative"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_name_reported_by_position() {
        let data = vec![
            ConstituentRecord::new("ALPHA LTD", 1.0, "IT"),
            ConstituentRecord::new(" ", 1.0, "IT"),
        ];
        let err = compute_impact_table(&data, 20_000.0, &ScenarioSet::new([100])).unwrap_err();
        assert!(matches!(err, ImpactError::InvalidRecord { ref name, .. } if name == "#1"));
    }

    #[test]
    fn test_duplicate_scenarios_kept() {
        let scenarios = ScenarioSet::new([100, 100]);
        let table = compute_impact_table(&records(), 20_000.0, &scenarios).unwrap();
        assert_eq!(table.column_count(), 5);
        let row = &table.rows()[0];
        assert_eq!(row.required_pct[0], row.required_pct[1]);
    }

    #[test]
    fn test_select() {
        let scenarios = ScenarioSet::new([100, -100, 250]);
        let table = compute_impact_table(&records(), 20_000.0, &scenarios).unwrap();

        let headline = table.select(&[250, 100]).unwrap();
        assert_eq!(headline.scenarios().points(), &[250, 100]);
        assert_relative_eq!(headline.rows()[0].required_pct[0], 12.5, epsilon = 1e-12);
        assert_relative_eq!(headline.rows()[0].required_pct[1], 5.0, epsilon = 1e-12);

        assert_eq!(
            table.select(&[500]).unwrap_err(),
            ImpactError::ScenarioNotFound { points: 500 }
        );
    }

    #[test]
    fn test_case_study_from_table() {
        let scenarios = ScenarioSet::new([100]);
        let table = compute_impact_table(&records(), 20_000.0, &scenarios).unwrap();

        let study = table
            .case_study(&Selector::contains("BETA"), &[100, 200])
            .unwrap();
        assert_eq!(study.name, "BETA LTD");
        assert_relative_eq!(study.get(100).unwrap(), 10.0, epsilon = 1e-12);
        // Not a table column, computed on the fly.
        assert_relative_eq!(study.get(200).unwrap(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_map() {
        let scenarios = ScenarioSet::new([100]);
        let table = compute_impact_table(&records(), 30_000.0, &scenarios).unwrap();
        let map = table.rows()[0].to_flat_map(table.scenarios(), Some(2));

        assert_eq!(map["name"], "ALPHA LTD");
        assert_eq!(map["required % change for +100 pts"], 3.33);
    }
}
