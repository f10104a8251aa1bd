//! Derived metrics over a sampled payoff curve.
//! All functions are pure -- they take samples and return computed values.

use super::curve::CurvePoint;

/// Highest profit/loss across the samples. 0 for an empty slice.
pub fn max_profit_loss(points: &[CurvePoint]) -> f64 {
    match points.split_first() {
        Some((first, rest)) => rest
            .iter()
            .map(|p| p.profit_loss)
            .fold(first.profit_loss, f64::max),
        None => 0.0,
    }
}

/// Lowest profit/loss across the samples. 0 for an empty slice.
pub fn min_profit_loss(points: &[CurvePoint]) -> f64 {
    match points.split_first() {
        Some((first, rest)) => rest
            .iter()
            .map(|p| p.profit_loss)
            .fold(first.profit_loss, f64::min),
        None => 0.0,
    }
}

/// Grid prices where the payoff changes sign between adjacent samples.
///
/// Non-strict on the arriving side: negative -> zero and positive -> zero both
/// count, zero -> zero does not. The reported price is the later sample of the
/// pair, never an interpolated root.
pub fn zero_crossings(points: &[CurvePoint]) -> Vec<f64> {
    points
        .windows(2)
        .filter(|w| {
            let (prev, curr) = (w[0].profit_loss, w[1].profit_loss);
            (prev < 0.0 && curr >= 0.0) || (prev > 0.0 && curr <= 0.0)
        })
        .map(|w| w[1].underlying_price)
        .collect()
}
