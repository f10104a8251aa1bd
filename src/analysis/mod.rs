pub mod curve;
pub mod metrics;

pub use curve::{CurvePoint, PayoffCurve, PRICE_STEP};

use crate::models::Contract;

/// Full payoff-at-expiry analysis of one portfolio.
/// Every field is derived from the same curve.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub curve: Vec<CurvePoint>,
    pub max_profit: f64,
    pub max_loss: f64,
    pub break_even_points: Vec<f64>,
}

/// Sampled profit/loss profile of the portfolio over [0, 2 * max strike].
pub fn compute_curve(contracts: &[Contract]) -> Vec<CurvePoint> {
    PayoffCurve::sweep(contracts).into_points()
}

pub fn max_profit(contracts: &[Contract]) -> f64 {
    PayoffCurve::sweep(contracts).max_profit()
}

pub fn max_loss(contracts: &[Contract]) -> f64 {
    PayoffCurve::sweep(contracts).max_loss()
}

pub fn break_even_points(contracts: &[Contract]) -> Vec<f64> {
    PayoffCurve::sweep(contracts).break_even_points()
}

/// Sweep once and derive all metrics from that single curve.
/// Pure and total: any contract slice (including empty) yields a result.
pub fn analyze(contracts: &[Contract]) -> AnalysisResult {
    let curve = PayoffCurve::sweep(contracts);
    let max_profit = curve.max_profit();
    let max_loss = curve.max_loss();
    let break_even_points = curve.break_even_points();

    tracing::debug!(
        contracts = contracts.len(),
        samples = curve.len(),
        max_profit,
        max_loss,
        break_evens = break_even_points.len(),
        "portfolio analyzed"
    );

    AnalysisResult {
        curve: curve.into_points(),
        max_profit,
        max_loss,
        break_even_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contract::contract;
    use crate::models::{Direction, OptionKind};

    #[test]
    fn test_long_call_scenario() {
        let c = contract(OptionKind::Call, Direction::Long, 100.0, 10.0, 12.0);
        let result = analyze(&[c]);
        assert_eq!(result.max_loss, -12.0);
        assert_eq!(result.max_profit, 88.0);
        assert_eq!(result.break_even_points, vec![112.0]);
        assert_eq!(result.curve[112].profit_loss, 0.0);
    }

    #[test]
    fn test_short_put_scenario() {
        let c = contract(OptionKind::Put, Direction::Short, 80.0, 5.0, 6.0);
        let result = analyze(&[c]);
        assert_eq!(result.max_profit, 5.0);
        assert_eq!(result.max_loss, -75.0);
        assert_eq!(result.break_even_points, vec![75.0]);
        assert_eq!(result.curve.len(), 161);
    }

    #[test]
    fn test_two_leg_portfolio() {
        let legs = [
            contract(OptionKind::Call, Direction::Long, 100.0, 10.0, 12.0),
            contract(OptionKind::Put, Direction::Short, 80.0, 5.0, 6.0),
        ];
        let result = analyze(&legs);
        assert_eq!(result.curve.len(), 201);
        // -75 - 12 at price 0, 88 + 5 at the top
        assert_eq!(result.max_loss, -87.0);
        assert_eq!(result.max_profit, 93.0);
        // p - 87 below 80, flat -7 up to 100, then p - 107
        assert_eq!(result.break_even_points, vec![107.0]);
    }

    #[test]
    fn test_empty_portfolio() {
        let result = analyze(&[]);
        assert_eq!(
            result.curve,
            vec![CurvePoint {
                underlying_price: 0.0,
                profit_loss: 0.0
            }]
        );
        assert_eq!(result.max_profit, 0.0);
        assert_eq!(result.max_loss, 0.0);
        assert!(result.break_even_points.is_empty());
    }

    #[test]
    fn test_metrics_match_curve_extrema() {
        let legs = [
            contract(OptionKind::Call, Direction::Short, 50.0, 3.5, 4.0),
            contract(OptionKind::Call, Direction::Long, 60.0, 1.0, 1.25),
            contract(OptionKind::Put, Direction::Long, 40.0, 0.5, 0.75),
        ];
        let result = analyze(&legs);
        let ys: Vec<f64> = result.curve.iter().map(|p| p.profit_loss).collect();
        let hi = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let lo = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(result.max_profit, hi);
        assert_eq!(result.max_loss, lo);
        for be in &result.break_even_points {
            assert!(result.curve.iter().any(|p| p.underlying_price == *be));
        }
    }

    #[test]
    fn test_single_operations_agree_with_analyze() {
        let legs = [
            contract(OptionKind::Put, Direction::Long, 90.0, 2.0, 2.5),
            contract(OptionKind::Call, Direction::Short, 110.0, 3.0, 3.5),
        ];
        let result = analyze(&legs);
        assert_eq!(compute_curve(&legs), result.curve);
        assert_eq!(max_profit(&legs), result.max_profit);
        assert_eq!(max_loss(&legs), result.max_loss);
        assert_eq!(break_even_points(&legs), result.break_even_points);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let legs = [
            contract(OptionKind::Call, Direction::Long, 33.3, 1.1, 1.7),
            contract(OptionKind::Put, Direction::Short, 21.9, 0.45, 0.6),
        ];
        let a = analyze(&legs);
        let b = analyze(&legs);
        assert_eq!(a.curve.len(), b.curve.len());
        for (x, y) in a.curve.iter().zip(&b.curve) {
            assert_eq!(x.profit_loss.to_bits(), y.profit_loss.to_bits());
        }
        assert_eq!(a.max_profit.to_bits(), b.max_profit.to_bits());
        assert_eq!(a.break_even_points, b.break_even_points);
    }
}
