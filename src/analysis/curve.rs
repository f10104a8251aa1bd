use crate::models::Contract;

/// Spacing of the underlying-price sweep. Fixed; outputs must line up with the integer grid.
pub const PRICE_STEP: f64 = 1.0;

/// One sample of the payoff profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub underlying_price: f64,
    pub profit_loss: f64,
}

/// Sampled payoff profile, ordered by strictly increasing underlying price.
/// Always holds at least one point.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffCurve {
    points: Vec<CurvePoint>,
}

impl PayoffCurve {
    /// Sweep [0, 2 * max strike] at PRICE_STEP and sum every contract's payoff at each price.
    pub fn sweep(contracts: &[Contract]) -> Self {
        let upper = 2.0 * max_strike(contracts);
        let samples = (upper / PRICE_STEP).floor() as usize + 1;

        let points = (0..samples)
            .map(|i| {
                // Index-based grid: no accumulated float drift.
                let price = i as f64 * PRICE_STEP;
                CurvePoint {
                    underlying_price: price,
                    profit_loss: profit_loss_at(contracts, price),
                }
            })
            .collect();

        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn into_points(self) -> Vec<CurvePoint> {
        self.points
    }

    pub fn max_profit(&self) -> f64 {
        super::metrics::max_profit_loss(&self.points)
    }

    pub fn max_loss(&self) -> f64 {
        super::metrics::min_profit_loss(&self.points)
    }

    pub fn break_even_points(&self) -> Vec<f64> {
        super::metrics::zero_crossings(&self.points)
    }
}

/// Largest strike in the portfolio, 0 when empty.
#[inline]
pub fn max_strike(contracts: &[Contract]) -> f64 {
    contracts.iter().map(|c| c.strike_price).fold(0.0, f64::max)
}

/// Aggregate profit/loss of all contracts at one underlying price.
#[inline]
pub fn profit_loss_at(contracts: &[Contract], price: f64) -> f64 {
    // Explicit +0.0 seed so an empty portfolio yields 0, not -0.
    contracts.iter().fold(0.0, |acc, c| acc + c.payoff_at(price))
}
