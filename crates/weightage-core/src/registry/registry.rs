//! Constituent registry.

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ImpactError, ImpactResult};
use crate::types::{ConstituentRecord, ImpactConfig};

/// Summed weights below this get a warning.
const LOW_COVERAGE_WARN_PCT: f64 = 95.0;

/// An ordered, validated list of index constituents.
///
/// Records keep their insertion order; case-study lookups and exports rely
/// on it for reproducible output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConstituentRegistry {
    records: Vec<ConstituentRecord>,
}

/// CSV row for constituent input files.
#[derive(Debug, Deserialize)]
struct ConstituentRow {
    name: String,
    #[serde(default)]
    weight_pct: Option<f64>,
    #[serde(default)]
    sector: String,
}

impl ConstituentRegistry {
    /// Loads a registry from `(name, weight_pct, sector)` triples using the
    /// default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::Validation`] if any record is malformed, a name
    /// is repeated, or the weights sum past 100 plus tolerance.
    pub fn load(source: &[(&str, f64, &str)]) -> ImpactResult<Self> {
        Self::load_with_config(source, &ImpactConfig::default())
    }

    /// Loads a registry from `(name, weight_pct, sector)` triples.
    ///
    /// # Errors
    ///
    /// See [`ConstituentRegistry::load`].
    pub fn load_with_config(
        source: &[(&str, f64, &str)],
        config: &ImpactConfig,
    ) -> ImpactResult<Self> {
        let records = source
            .iter()
            .map(|(name, weight_pct, sector)| ConstituentRecord::new(*name, *weight_pct, *sector))
            .collect();
        Self::from_records(records, config)
    }

    /// Builds a registry from already constructed records.
    ///
    /// # Errors
    ///
    /// See [`ConstituentRegistry::load`].
    pub fn from_records(
        records: Vec<ConstituentRecord>,
        config: &ImpactConfig,
    ) -> ImpactResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.name.as_str()) {
                return Err(ImpactError::validation(&record.name, "duplicate name"));
            }
        }

        let total: f64 = records.iter().map(|r| r.weight_pct).sum();
        if total > 100.0 + config.weight_sum_tolerance {
            return Err(ImpactError::validation(
                "<registry>",
                format!(
                    "weights sum to {:.4}%, above 100% + {} tolerance",
                    total, config.weight_sum_tolerance
                ),
            ));
        }
        if !records.is_empty() && total < LOW_COVERAGE_WARN_PCT {
            warn!(
                total_weight_pct = total,
                "constituent weights cover less than {}% of the index", LOW_COVERAGE_WARN_PCT
            );
        }

        info!(
            constituents = records.len(),
            total_weight_pct = total,
            "loaded constituent registry"
        );

        Ok(Self { records })
    }

    /// Reads a registry from CSV with a `name,weight_pct,sector` header.
    ///
    /// The `sector` column is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::Parse`] on malformed CSV,
    /// [`ImpactError::Validation`] for a row with an empty weight, and the
    /// errors of [`ConstituentRegistry::load`] on invalid data.
    pub fn from_csv_reader<R: Read>(reader: R, config: &ImpactConfig) -> ImpactResult<Self> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let row: ConstituentRow = result?;
            let Some(weight_pct) = row.weight_pct else {
                return Err(ImpactError::validation(&row.name, "weight is missing"));
            };
            records.push(ConstituentRecord::new(row.name, weight_pct, row.sector));
        }

        Self::from_records(records, config)
    }

    /// The records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[ConstituentRecord] {
        &self.records
    }

    /// Iterates the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ConstituentRecord> {
        self.records.iter()
    }

    /// Number of constituents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a constituent by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConstituentRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Sum of all percentage weights.
    #[must_use]
    pub fn total_weight_pct(&self) -> f64 {
        self.records.iter().map(|r| r.weight_pct).sum()
    }

    /// Consumes the registry, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<ConstituentRecord> {
        self.records
    }
}

impl AsRef<[ConstituentRecord]> for ConstituentRegistry {
    fn as_ref(&self) -> &[ConstituentRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a ConstituentRegistry {
    type Item = &'a ConstituentRecord;
    type IntoIter = std::slice::Iter<'a, ConstituentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &[(&str, f64, &str)] = &[
        ("ALPHA LTD", 40.0, "IT"),
        ("BETA LTD", 35.0, "Banking"),
        ("GAMMA LTD", 25.0, "IT"),
    ];

    #[test]
    fn test_load_preserves_order() {
        let registry = ConstituentRegistry::load(SAMPLE).unwrap();
        let names: Vec<&str> = registry.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ALPHA LTD", "BETA LTD", "GAMMA LTD"]);
        assert_eq!(registry.len(), 3);
        assert_relative_eq!(registry.total_weight_pct(), 100.0);
    }

    #[test]
    fn test_load_rejects_negative_weight() {
        let err = ConstituentRegistry::load(&[("OK LTD", 1.0, "IT"), ("BAD LTD", -2.0, "IT")])
            .unwrap_err();
        match err {
            ImpactError::Validation { name, .. } => assert_eq!(name, "BAD LTD"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_empty_name() {
        let err = ConstituentRegistry::load(&[("", 1.0, "IT")]).unwrap_err();
        assert!(matches!(err, ImpactError::Validation { .. }));
    }

    #[test]
    fn test_load_rejects_duplicate_name() {
        let err =
            ConstituentRegistry::load(&[("SAME LTD", 1.0, "IT"), ("SAME LTD", 2.0, "FMCG")])
                .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_weight_sum_tolerance() {
        let over = &[("A", 60.0, "x"), ("B", 40.4, "y")];
        assert!(ConstituentRegistry::load(over).is_ok());

        let strict = ImpactConfig::new().with_weight_sum_tolerance(0.1);
        assert!(matches!(
            ConstituentRegistry::load_with_config(over, &strict),
            Err(ImpactError::Validation { .. })
        ));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ConstituentRegistry::load(&[]).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get() {
        let registry = ConstituentRegistry::load(SAMPLE).unwrap();
        assert_eq!(registry.get("BETA LTD").map(|r| r.sector.as_str()), Some("Banking"));
        assert!(registry.get("beta ltd").is_none());
    }

    #[test]
    fn test_from_csv_reader() {
        let data = "name,weight_pct,sector\nALPHA LTD, 40.0 ,IT\n\"BETA, INC\",35.5,Banking\n";
        let registry =
            ConstituentRegistry::from_csv_reader(data.as_bytes(), &ImpactConfig::default())
                .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.records()[1].name, "BETA, INC");
        assert_relative_eq!(registry.records()[0].weight_pct, 40.0);
    }

    #[test]
    fn test_from_csv_reader_missing_weight() {
        let data = "name,weight_pct,sector\nALPHA LTD,,IT\n";
        let err = ConstituentRegistry::from_csv_reader(data.as_bytes(), &ImpactConfig::default())
            .unwrap_err();
        match err {
            ImpactError::Validation { name, reason } => {
                assert_eq!(name, "ALPHA LTD");
                assert!(reason.contains("missing"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let data = "name,sector\nALPHA LTD,IT\n";
        let err = ConstituentRegistry::from_csv_reader(data.as_bytes(), &ImpactConfig::default())
            .unwrap_err();
        assert!(matches!(err, ImpactError::Validation { .. }));
    }

    #[test]
    fn test_from_csv_reader_rejects_bad_number() {
        let data = "name,weight_pct,sector\nALPHA LTD,abc,IT\n";
        let err = ConstituentRegistry::from_csv_reader(data.as_bytes(), &ImpactConfig::default())
            .unwrap_err();
        assert!(matches!(err, ImpactError::Parse { .. }));
    }
}
