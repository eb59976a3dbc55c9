// File: crates/graph-core/src/scale.rs
// Summary: Value-to-height normalisation against the largest maximum on a canvas.
// Notes:
// - Ratios are computed in decimal arithmetic so labels and bars land on the
//   same 2-decimal step regardless of binary float noise.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::series::SeriesStats;

/// Precision inputs are reduced to before dividing.
const SIGNIFICANT_DIGITS: u32 = 10;
/// Decimal places kept in a height ratio.
const RATIO_DP: u32 = 2;
/// Largest decimal exponent of the maximum converted without shifting.
const MAX_UNSHIFTED_EXP: i32 = 18;

/// Largest `max` across `series`. `None` when any series has no finite
/// maximum, which zeroes every height on the canvas.
pub fn global_max<S: SeriesStats>(series: &[S]) -> Option<f64> {
    series
        .iter()
        .map(|s| s.max().filter(|m| m.is_finite()))
        .collect::<Option<Vec<_>>>()?
        .into_iter()
        .reduce(f64::max)
}

fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)?.round_sf(SIGNIFICANT_DIGITS)
}

/// Both operands as decimals. Magnitudes outside `Decimal`'s comfortable
/// range are divided by a shared power of ten first, which keeps the ratio.
fn decimal_operands(value: f64, max: f64) -> Option<(Decimal, Decimal)> {
    if !value.is_finite() || !max.is_finite() || max == 0.0 { return None; }
    let exp = max.abs().log10().floor() as i32;
    let (value, max) = if exp.abs() > MAX_UNSHIFTED_EXP {
        let shift = 10f64.powi(exp);
        (value / shift, max / shift)
    } else {
        (value, max)
    };
    Some((to_decimal(value)?, to_decimal(max)?))
}

/// `value / global_max` rounded half-up to two places; `None` when it cannot
/// be computed (no maximum, zero maximum, or non-finite input).
pub fn height_ratio(value: f64, global_max: Option<f64>) -> Option<Decimal> {
    let (value, max) = decimal_operands(value, global_max?)?;
    let ratio = value.checked_div(max)?;
    Some(ratio.round_dp_with_strategy(RATIO_DP, RoundingStrategy::MidpointAwayFromZero))
}

/// Height ratio as a float, degrading to 0 when it cannot be computed.
pub fn point_height_percentage(value: f64, global_max: Option<f64>) -> f64 {
    match height_ratio(value, global_max).and_then(|r| r.to_f64()) {
        Some(ratio) => ratio,
        None => {
            tracing::debug!(value, ?global_max, "height ratio unavailable; using 0");
            0.0
        }
    }
}
