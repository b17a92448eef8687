//! Run file loading.
//!
//! A run file fixes the inputs of a report so it can be reproduced:
//!
//! ```toml
//! index_name = "NIFTY 50"
//! index_level = 25509.7
//! scenarios = [100, 200, 250, 500, -100, -200, -250, -500]
//! constituents = "data/nifty50.csv"
//!
//! [analytics]
//! display_precision = 2
//! weight_sum_tolerance = 0.5
//! ```
//!
//! Command-line flags take precedence over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use weightage_core::ImpactConfig;

use crate::error::{CliError, CliResult};

/// Contents of a TOML run file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunFile {
    /// Display name of the index.
    pub index_name: Option<String>,

    /// Index level.
    pub index_level: Option<f64>,

    /// Point moves.
    pub scenarios: Option<Vec<i64>>,

    /// Constituents CSV, relative to the run file's directory.
    pub constituents: Option<PathBuf>,

    /// Analytics settings.
    pub analytics: ImpactConfig,
}

impl RunFile {
    /// Loads a run file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut file: Self = toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if let (Some(members), Some(dir)) = (file.constituents.as_mut(), path.parent()) {
            if members.is_relative() {
                *members = dir.join(&*members);
            }
        }

        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            r#"
index_name = "TEST 10"
index_level = 1000.5
scenarios = [10, -10]
constituents = "members.csv"

[analytics]
display_precision = 3
"#
        )
        .unwrap();

        let file = RunFile::from_file(tmp.path()).unwrap();
        assert_eq!(file.index_name.as_deref(), Some("TEST 10"));
        assert_eq!(file.index_level, Some(1000.5));
        assert_eq!(file.scenarios, Some(vec![10, -10]));
        assert_eq!(
            file.constituents,
            Some(tmp.path().parent().unwrap().join("members.csv"))
        );
        assert_eq!(file.analytics.display_precision, 3);
        assert_eq!(file.analytics.parallel_threshold, 100);
    }

    #[test]
    fn test_empty_file_is_default() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let file = RunFile::from_file(tmp.path()).unwrap();
        assert!(file.index_level.is_none());
        assert_eq!(file.analytics, ImpactConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "index_levle = 100.0").unwrap();
        assert!(matches!(
            RunFile::from_file(tmp.path()),
            Err(CliError::Config { .. })
        ));
    }
}
