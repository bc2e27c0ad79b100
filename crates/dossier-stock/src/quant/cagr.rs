//! Compound annual growth rate

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::domain::MetricPoint;

/// Computes the CAGR across a most-recent-first series, as a percentage
/// rounded to two decimal places.
///
/// Precondition: points are ordered most-recent-first, so "begin" is the
/// last point and "end" is the first. Returns `None` when fewer than two
/// points exist or when either endpoint is non-positive; a growth rate
/// over a non-positive base is undefined or misleading, and an explicit
/// absence is more honest than a fabricated number.
pub fn compute_cagr(points: &[MetricPoint]) -> Option<Decimal> {
    if points.len() < 2 {
        return None;
    }

    let begin = points.last()?.value;
    let end = points.first()?.value;
    if begin <= Decimal::ZERO || end <= Decimal::ZERO {
        return None;
    }

    // The fractional exponent leaves exact-decimal arithmetic: the ratio
    // and power run in f64 and the percentage is rounded back to two
    // places. Dividing in f64 keeps extreme magnitude ratios from
    // overflowing decimal division.
    let periods = (points.len() - 1) as f64;
    let ratio = end.to_f64()? / begin.to_f64()?;
    let growth_pct = (ratio.powf(1.0 / periods) - 1.0) * 100.0;

    Decimal::from_f64(growth_pct).map(|value| value.round_dp(2))
}
