//! Display rounding and tabular export.
//!
//! Values stay unrounded everywhere in the calculator; rounding happens only
//! here, when values are rendered for people or files.

mod table_csv;

pub use table_csv::{parse_csv, to_csv_string, write_csv, ParsedRow, ParsedTable};

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

fn to_rounded_decimal(value: f64, precision: u32) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero))
}

/// Rounds a value to `precision` decimal places, half away from zero.
///
/// Non-finite values are returned unchanged.
#[must_use]
pub fn round_display(value: f64, precision: u32) -> f64 {
    // Going through the decimal text yields the f64 nearest to the rounded value.
    to_rounded_decimal(value, precision)
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or(value)
}

/// Renders a value with exactly `precision` decimal places.
///
/// ```
/// use weightage_core::format_fixed;
///
/// assert_eq!(format_fixed(13.154622, 2), "13.15");
/// assert_eq!(format_fixed(-0.004, 2), "0.00");
/// assert_eq!(format_fixed(5.0, 2), "5.00");
/// ```
#[must_use]
pub fn format_fixed(value: f64, precision: u32) -> String {
    match to_rounded_decimal(value, precision) {
        Some(d) => {
            // Drop the sign of a value that rounds to zero.
            let d = if d.is_zero() { Decimal::ZERO } else { d };
            format!("{:.*}", precision as usize, d)
        }
        None => value.to_string(),
    }
}
