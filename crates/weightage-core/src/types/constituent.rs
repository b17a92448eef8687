//! Index constituent records.

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, ImpactResult};

/// One member of a weighted index.
///
/// The fractional weight is always derived from `weight_pct` on demand, so the
/// two can never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituentRecord {
    /// Identifier, unique within a registry.
    pub name: String,

    /// Official index weight in percent (0-100).
    pub weight_pct: f64,

    /// Free-text sector classification.
    pub sector: String,
}

impl ConstituentRecord {
    /// Creates a record without validating it.
    ///
    /// Use [`ConstituentRecord::validate`] or load through a
    /// [`ConstituentRegistry`](crate::ConstituentRegistry) to check it.
    #[must_use]
    pub fn new(name: impl Into<String>, weight_pct: f64, sector: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight_pct,
            sector: sector.into(),
        }
    }

    /// Weight as a fraction (`weight_pct / 100`).
    #[must_use]
    pub fn weight_frac(&self) -> f64 {
        self.weight_pct / 100.0
    }

    /// Returns a copy with a new percentage weight.
    #[must_use]
    pub fn with_weight_pct(mut self, weight_pct: f64) -> Self {
        self.weight_pct = weight_pct;
        self
    }

    /// Checks the record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::Validation`] if the name is blank or the weight
    /// is negative, non-finite or above 100.
    pub fn validate(&self) -> ImpactResult<()> {
        if self.name.trim().is_empty() {
            return Err(ImpactError::validation(&self.name, "name is empty"));
        }
        if !self.weight_pct.is_finite() {
            return Err(ImpactError::validation(
                &self.name,
                format!("weight {} is not a finite number", self.weight_pct),
            ));
        }
        if self.weight_pct < 0.0 {
            return Err(ImpactError::validation(
                &self.name,
                format!("weight {} is negative", self.weight_pct),
            ));
        }
        if self.weight_pct > 100.0 {
            return Err(ImpactError::validation(
                &self.name,
                format!("weight {} exceeds 100%", self.weight_pct),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weight_frac_follows_weight_pct() {
        let record = ConstituentRecord::new("INFOSYS LTD", 2.98, "IT");
        assert_relative_eq!(record.weight_frac(), 0.0298, epsilon = 1e-12);

        let record = record.with_weight_pct(5.96);
        assert_relative_eq!(record.weight_frac(), 0.0596, epsilon = 1e-12);
    }

    #[test]
    fn test_validate_accepts_zero_weight() {
        assert!(ConstituentRecord::new("DORMANT LTD", 0.0, "Other")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_records() {
        let cases = [
            ConstituentRecord::new("", 1.0, "IT"),
            ConstituentRecord::new("   ", 1.0, "IT"),
            ConstituentRecord::new("NEG LTD", -0.01, "IT"),
            ConstituentRecord::new("NAN LTD", f64::NAN, "IT"),
            ConstituentRecord::new("INF LTD", f64::INFINITY, "IT"),
            ConstituentRecord::new("BIG LTD", 100.5, "IT"),
        ];

        for record in cases {
            assert!(
                matches!(record.validate(), Err(ImpactError::Validation { .. })),
                "expected validation error for {:?}",
                record
            );
        }
    }

    #[test]
    fn test_serde() {
        let record = ConstituentRecord::new("ITC LTD", 2.5, "FMCG");
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ConstituentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
