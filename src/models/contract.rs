use chrono::{DateTime, Utc};
use serde::Deserialize;
use smallvec::SmallVec;

/// Maximum number of contracts in one analyzed portfolio.
pub const MAX_CONTRACTS: usize = 4;

/// A validated portfolio. Stack-allocated up to MAX_CONTRACTS.
pub type Portfolio = SmallVec<[Contract; MAX_CONTRACTS]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

/// One options contract as submitted by the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contract {
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub strike_price: f64,
    pub bid: f64,
    pub ask: f64,
    /// Carried through; payoff-at-expiry does not depend on it.
    pub expiration_date: DateTime<Utc>,
    #[serde(rename = "long_short")]
    pub direction: Direction,
}

impl Contract {
    /// Intrinsic value at expiry for the holder, before premium.
    #[inline]
    pub fn intrinsic_at(&self, underlying: f64) -> f64 {
        match self.kind {
            OptionKind::Call => (underlying - self.strike_price).max(0.0),
            OptionKind::Put => (self.strike_price - underlying).max(0.0),
        }
    }

    /// Profit/loss of this position if the underlying settles at `underlying`.
    ///
    /// Long pays the ask and receives intrinsic value; short receives the bid
    /// and owes intrinsic value. No time value.
    #[inline]
    pub fn payoff_at(&self, underlying: f64) -> f64 {
        let intrinsic = self.intrinsic_at(underlying);
        match self.direction {
            Direction::Long => intrinsic - self.ask,
            Direction::Short => self.bid - intrinsic,
        }
    }
}

#[cfg(test)]
pub(crate) fn contract(
    kind: OptionKind,
    direction: Direction,
    strike: f64,
    bid: f64,
    ask: f64,
) -> Contract {
    Contract {
        kind,
        strike_price: strike,
        bid,
        ask,
        expiration_date: DateTime::<Utc>::from_timestamp(1_767_225_600, 0).unwrap_or_default(),
        direction,
    }
}
