//! Index level context.

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, ImpactResult};

/// Checks that an index level can be divided by.
///
/// # Errors
///
/// Returns [`ImpactError::InvalidIndexLevel`] for zero, negative, NaN or
/// infinite levels.
pub fn validate_index_level(level: f64) -> ImpactResult<f64> {
    if level.is_finite() && level > 0.0 {
        Ok(level)
    } else {
        Err(ImpactError::InvalidIndexLevel { level })
    }
}

/// The current index value for one computation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexContext {
    /// Display name of the index (e.g. "NIFTY 50").
    pub name: Option<String>,

    /// Current index level.
    pub level: f64,
}

impl IndexContext {
    /// Creates a validated context.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::InvalidIndexLevel`] if `level` is not positive.
    pub fn new(level: f64) -> ImpactResult<Self> {
        Ok(Self {
            name: None,
            level: validate_index_level(level)?,
        })
    }

    /// Sets the index name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
