//! Error types for index impact analytics.
//!
//! This module defines the error types used throughout the weightage crate.

use thiserror::Error;

/// Result type for impact operations.
pub type ImpactResult<T> = Result<T, ImpactError>;

/// Errors that can occur while loading constituents or computing impacts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    /// Malformed constituent record rejected at registry load.
    #[error("Invalid constituent '{name}': {reason}")]
    Validation {
        /// The constituent name (may be empty when the name itself is missing).
        name: String,
        /// The reason the record was rejected.
        reason: String,
    },

    /// Non-positive or non-finite index level.
    #[error("Invalid index level: {level} (must be a positive finite number)")]
    InvalidIndexLevel {
        /// The rejected level.
        level: f64,
    },

    /// Case-study selector matched no constituent.
    #[error("No constituent matches '{selector}'")]
    NotFound {
        /// Description of the selector.
        selector: String,
    },

    /// A scenario requested from a table is not one of its columns.
    #[error("Scenario {points:+} pts is not part of the table")]
    ScenarioNotFound {
        /// The requested point move.
        points: i64,
    },

    /// A record failed during batch computation.
    #[error("Impact calculation failed for '{name}': {reason}")]
    InvalidRecord {
        /// The offending constituent.
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Writing the tabular export failed.
    #[error("Export failed: {reason}")]
    Export {
        /// Underlying cause.
        reason: String,
    },

    /// Reading tabular data failed.
    #[error("Parse failed: {reason}")]
    Parse {
        /// Underlying cause.
        reason: String,
    },
}

impl ImpactError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a not-found error.
    #[must_use]
    pub fn not_found(selector: impl Into<String>) -> Self {
        Self::NotFound {
            selector: selector.into(),
        }
    }

    /// Create an invalid record error.
    #[must_use]
    pub fn invalid_record(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an export error.
    #[must_use]
    pub fn export(reason: impl Into<String>) -> Self {
        Self::Export {
            reason: reason.into(),
        }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for ImpactError {
    fn from(err: csv::Error) -> Self {
        Self::parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImpactError::validation("ACME LTD", "negative weight");
        assert!(err.to_string().contains("ACME LTD"));
        assert!(err.to_string().contains("negative weight"));

        let err = ImpactError::InvalidIndexLevel { level: -1.0 };
        assert!(err.to_string().contains("-1"));

        let err = ImpactError::not_found("INFY");
        assert!(err.to_string().contains("INFY"));

        let err = ImpactError::ScenarioNotFound { points: 100 };
        assert!(err.to_string().contains("+100"));
    }

    #[test]
    fn test_error_clone() {
        let err = ImpactError::invalid_record("X", "weight is NaN");
        assert_eq!(err.clone(), err);
    }
}
