//! Point-move scenarios.

use serde::{Deserialize, Serialize};

/// Prefix shared by every scenario column label.
const LABEL_PREFIX: &str = "required % change for ";

/// Suffix shared by every scenario column label.
const LABEL_SUFFIX: &str = " pts";

/// Column label for a point move, e.g. `required % change for +100 pts`.
#[must_use]
pub fn scenario_label(points: i64) -> String {
    format!("{LABEL_PREFIX}{points:+}{LABEL_SUFFIX}")
}

/// Recovers the point move from a label produced by [`scenario_label`].
#[must_use]
pub fn parse_scenario_label(label: &str) -> Option<i64> {
    label
        .trim()
        .strip_prefix(LABEL_PREFIX)?
        .strip_suffix(LABEL_SUFFIX)?
        .parse()
        .ok()
}

/// An ordered list of hypothetical index moves, in index points.
///
/// Order is kept as supplied and duplicates are not removed; each entry
/// becomes one output column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioSet {
    points: Vec<i64>,
}

impl ScenarioSet {
    /// Creates a scenario set from point moves.
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = i64>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// The point moves in order.
    #[must_use]
    pub fn points(&self) -> &[i64] {
        &self.points
    }

    /// Iterates the point moves.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.points.iter().copied()
    }

    /// Number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no scenarios.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of the first occurrence of a point move.
    #[must_use]
    pub fn position(&self, points: i64) -> Option<usize> {
        self.points.iter().position(|&p| p == points)
    }

    /// Only the rising (positive) moves, order preserved.
    #[must_use]
    pub fn positive(&self) -> Self {
        Self::new(self.iter().filter(|p| *p > 0))
    }

    /// Only the falling (negative) moves, order preserved.
    #[must_use]
    pub fn negative(&self) -> Self {
        Self::new(self.iter().filter(|p| *p < 0))
    }

    /// Column labels, one per scenario.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.iter().map(scenario_label).collect()
    }
}

impl From<Vec<i64>> for ScenarioSet {
    fn from(points: Vec<i64>) -> Self {
        Self { points }
    }
}

impl From<&[i64]> for ScenarioSet {
    fn from(points: &[i64]) -> Self {
        Self::new(points.iter().copied())
    }
}

impl FromIterator<i64> for ScenarioSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter)
    }
}
