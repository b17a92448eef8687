//! The weight-to-impact formula.
//!
//! For a constituent with fractional weight `w`, moving the index by `p`
//! points at level `L` requires a price change of
//!
//! ```text
//! required % = (p / L) / w × 100
//! ```
//!
//! assuming every other constituent is unchanged.

use crate::error::ImpactResult;
use crate::types::validate_index_level;

/// Percentage price change one constituent needs to move the index by
/// `points_change` points on its own.
///
/// The result is unrounded. Its sign follows `points_change` for any positive
/// weight, and it scales inversely with `weight_frac`.
///
/// A zero weight yields `0.0` rather than an error: a constituent with no
/// weight cannot move the index, and reporting zero keeps batch runs total.
///
/// # Errors
///
/// Returns [`ImpactError::InvalidIndexLevel`](crate::ImpactError::InvalidIndexLevel)
/// if `index_level` is not a positive finite number.
///
/// # Example
///
/// ```
/// use weightage_core::required_pct_change;
///
/// let pct = required_pct_change(100.0, 25_509.7, 0.0298).unwrap();
/// assert!((pct - 13.1546).abs() < 1e-4);
/// ```
pub fn required_pct_change(
    points_change: f64,
    index_level: f64,
    weight_frac: f64,
) -> ImpactResult<f64> {
    let index_level = validate_index_level(index_level)?;
    Ok(pct_change_unchecked(points_change, index_level, weight_frac))
}

/// Formula body for callers that already validated the level.
#[inline]
pub(crate) fn pct_change_unchecked(points_change: f64, index_level: f64, weight_frac: f64) -> f64 {
    if weight_frac > 0.0 {
        let index_pct_move = points_change / index_level;
        index_pct_move / weight_frac * 100.0
    } else {
        0.0
    }
}
