//! Single-constituent case studies.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::impact::pct_change_unchecked;
use crate::error::{ImpactError, ImpactResult};
use crate::export::round_display;
use crate::types::{scenario_label, validate_index_level, ConstituentRecord};

/// Picks one constituent by name.
///
/// When several constituents match, the first one in registry order wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Name equals the given string.
    Exact(String),
    /// Name contains the given string (case-sensitive).
    Contains(String),
    /// Name contains the given string, ignoring ASCII case.
    ContainsIgnoreCase(String),
}

impl Selector {
    /// Exact name match.
    #[must_use]
    pub fn exact(name: impl Into<String>) -> Self {
        Self::Exact(name.into())
    }

    /// Case-sensitive substring match.
    #[must_use]
    pub fn contains(fragment: impl Into<String>) -> Self {
        Self::Contains(fragment.into())
    }

    /// Case-insensitive substring match.
    #[must_use]
    pub fn contains_ignore_case(fragment: impl Into<String>) -> Self {
        Self::ContainsIgnoreCase(fragment.into())
    }

    /// Returns true if `name` satisfies the selector.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(target) => name == target,
            Self::Contains(fragment) => name.contains(fragment.as_str()),
            Self::ContainsIgnoreCase(fragment) => name
                .to_ascii_lowercase()
                .contains(&fragment.to_ascii_lowercase()),
        }
    }

    /// First matching record in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::NotFound`] if nothing matches.
    pub fn find_first<'a, I>(&self, records: I) -> ImpactResult<&'a ConstituentRecord>
    where
        I: IntoIterator<Item = &'a ConstituentRecord>,
    {
        records
            .into_iter()
            .find(|r| self.matches(&r.name))
            .ok_or_else(|| ImpactError::not_found(self.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(s) => write!(f, "{s}"),
            Self::Contains(s) => write!(f, "*{s}*"),
            Self::ContainsIgnoreCase(s) => write!(f, "*{s}* (any case)"),
        }
    }
}

/// Required % change for one scenario within a case study.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseStudyValue {
    /// Index move in points.
    pub points: i64,
    /// Unrounded required % change.
    pub required_pct: f64,
}

/// One constituent's impact figures for a chosen set of scenarios.
///
/// Serializes as a flat object:
///
/// ```json
/// {"name": "INFOSYS LTD", "weight_pct": 2.98, "required % change for +100 pts": 13.15}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CaseStudyRecord {
    /// Constituent name.
    pub name: String,
    /// Index weight in percent.
    pub weight_pct: f64,
    /// Values in requested order.
    pub values: Vec<CaseStudyValue>,
}

impl CaseStudyRecord {
    /// Value for a point move, first occurrence.
    #[must_use]
    pub fn get(&self, points: i64) -> Option<f64> {
        self.values
            .iter()
            .find(|v| v.points == points)
            .map(|v| v.required_pct)
    }

    /// Copy with every value rounded for display.
    #[must_use]
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            name: self.name.clone(),
            weight_pct: round_display(self.weight_pct, precision),
            values: self
                .values
                .iter()
                .map(|v| CaseStudyValue {
                    points: v.points,
                    required_pct: round_display(v.required_pct, precision),
                })
                .collect(),
        }
    }

    /// Field name to value mapping.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".into(), Value::from(self.name.clone()));
        map.insert("weight_pct".into(), Value::from(self.weight_pct));
        for v in &self.values {
            map.insert(scenario_label(v.points), Value::from(v.required_pct));
        }
        map
    }
}

impl Serialize for CaseStudyRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.values.len()))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("weight_pct", &self.weight_pct)?;
        for v in &self.values {
            map.serialize_entry(&scenario_label(v.points), &v.required_pct)?;
        }
        map.end()
    }
}

/// Builds a case study for the first record matching `selector`.
///
/// `points` need not match any table's scenario set; each value is computed
/// directly from the record's weight.
///
/// # Errors
///
/// - [`ImpactError::InvalidIndexLevel`] if `index_level` is not positive
/// - [`ImpactError::NotFound`] if no record matches
/// - [`ImpactError::InvalidRecord`] if the matched record is malformed
pub fn build_case_study(
    records: &[ConstituentRecord],
    selector: &Selector,
    index_level: f64,
    points: &[i64],
) -> ImpactResult<CaseStudyRecord> {
    let index_level = validate_index_level(index_level)?;
    let record = selector.find_first(records)?;
    record.validate().map_err(|err| match err {
        ImpactError::Validation { reason, .. } => ImpactError::invalid_record(&record.name, reason),
        other => other,
    })?;

    let weight_frac = record.weight_frac();
    let values = points
        .iter()
        .map(|&p| CaseStudyValue {
            points: p,
            required_pct: pct_change_unchecked(p as f64, index_level, weight_frac),
        })
        .collect();

    Ok(CaseStudyRecord {
        name: record.name.clone(),
        weight_pct: record.weight_pct,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn records() -> Vec<ConstituentRecord> {
        vec![
            ConstituentRecord::new("TATA CONSULTANCY SERVICES LTD", 5.33, "IT"),
            ConstituentRecord::new("INFOSYS LTD", 2.98, "IT"),
            ConstituentRecord::new("TATA STEEL LTD", 1.08, "Metals/Steel"),
        ]
    }

    #[test]
    fn test_selector_matching() {
        assert!(Selector::exact("INFOSYS LTD").matches("INFOSYS LTD"));
        assert!(!Selector::exact("INFOSYS").matches("INFOSYS LTD"));
        assert!(Selector::contains("INFOSYS").matches("INFOSYS LTD"));
        assert!(!Selector::contains("infosys").matches("INFOSYS LTD"));
        assert!(Selector::contains_ignore_case("infosys").matches("INFOSYS LTD"));
    }

    #[test]
    fn test_first_match_wins() {
        let data = records();
        let found = Selector::contains("TATA").find_first(&data).unwrap();
        assert_eq!(found.name, "TATA CONSULTANCY SERVICES LTD");
    }

    #[test]
    fn test_not_found() {
        let err = build_case_study(&records(), &Selector::contains("WIPRO"), 25_509.7, &[100])
            .unwrap_err();
        assert_eq!(err, ImpactError::not_found("*WIPRO*"));
    }

    #[test]
    fn test_infosys_case_study() {
        let study = build_case_study(
            &records(),
            &Selector::contains("INFOSYS"),
            25_509.7,
            &[100, 200, 250, 500],
        )
        .unwrap();

        assert_eq!(study.name, "INFOSYS LTD");
        assert_abs_diff_eq!(study.weight_pct, 2.98);
        assert_eq!(study.values.len(), 4);
        assert_abs_diff_eq!(study.get(100).unwrap(), 13.16, epsilon = 0.01);
        assert_abs_diff_eq!(study.get(500).unwrap(), 5.0 * study.get(100).unwrap(), epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_level_checked_first() {
        let err = build_case_study(&records(), &Selector::contains("NOPE"), 0.0, &[100]).unwrap_err();
        assert!(matches!(err, ImpactError::InvalidIndexLevel { .. }));
    }

    #[test]
    fn test_flat_serialization() {
        let study = build_case_study(&records(), &Selector::exact("INFOSYS LTD"), 25_509.7, &[100, -100])
            .unwrap()
            .rounded(2);
        let json: Value = serde_json::to_value(&study).unwrap();

        assert_eq!(json["name"], "INFOSYS LTD");
        assert_eq!(json["weight_pct"], 2.98);
        assert_eq!(json["required % change for +100 pts"], 13.15);
        assert_eq!(json["required % change for -100 pts"], -13.15);
        assert_eq!(Value::Object(study.to_map()), json);
    }
}
