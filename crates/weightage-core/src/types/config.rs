//! Configuration for impact computation.

use serde::{Deserialize, Serialize};

/// Configuration for impact computation.
///
/// Controls parallelism, display rounding and registry validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum constituent count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Decimal places used when rendering values for display or export.
    pub display_precision: u32,

    /// How far above 100 the summed constituent weights may go before the
    /// registry is rejected, in percentage points.
    pub weight_sum_tolerance: f64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100,
            display_precision: 2,
            weight_sum_tolerance: 0.5,
        }
    }
}

impl ImpactConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the display precision.
    #[must_use]
    pub fn with_display_precision(mut self, precision: u32) -> Self {
        self.display_precision = precision;
        self
    }

    /// Sets the weight sum tolerance.
    #[must_use]
    pub fn with_weight_sum_tolerance(mut self, tolerance: f64) -> Self {
        self.weight_sum_tolerance = tolerance;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ImpactConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 100);
        assert_eq!(config.display_precision, 2);
        assert!((config.weight_sum_tolerance - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ImpactConfig::new()
            .with_parallel(false)
            .with_threshold(10)
            .with_display_precision(4)
            .with_weight_sum_tolerance(1.0);

        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 10);
        assert_eq!(config.display_precision, 4);
        assert!((config.weight_sum_tolerance - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_should_parallelize() {
        let config = ImpactConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
        }

        assert!(!ImpactConfig::sequential().should_parallelize(10_000));
    }

    #[test]
    fn test_serde_partial() {
        let parsed: ImpactConfig = serde_json::from_str(r#"{"parallel_threshold": 20}"#).unwrap();
        assert_eq!(parsed.parallel_threshold, 20);
        assert_eq!(parsed.display_precision, 2);
    }
}
