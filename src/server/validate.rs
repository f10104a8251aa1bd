use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::{Contract, Portfolio, MAX_CONTRACTS};

/// Check a decoded contract list before it reaches the analyzer.
/// Pure function, no side effects. bid <= ask is deliberately not checked.
pub fn validate_portfolio(
    contracts: Vec<Contract>,
    max_strike_price: f64,
) -> AnalyzerResult<Portfolio> {
    // 1. Portfolio size
    if contracts.len() > MAX_CONTRACTS {
        return Err(AnalyzerError::BadRequest(format!(
            "Cannot process more than {MAX_CONTRACTS} options contracts"
        )));
    }

    for (i, c) in contracts.iter().enumerate() {
        // 2. Strike must be a usable sweep bound
        if !c.strike_price.is_finite() || c.strike_price < 0.0 {
            return Err(AnalyzerError::BadRequest(format!(
                "contract {i}: strike_price must be a non-negative number"
            )));
        }
        if c.strike_price > max_strike_price {
            return Err(AnalyzerError::BadRequest(format!(
                "contract {i}: strike_price {} exceeds limit {max_strike_price}",
                c.strike_price
            )));
        }

        // 3. Premiums
        if !c.bid.is_finite() || !c.ask.is_finite() {
            return Err(AnalyzerError::BadRequest(format!(
                "contract {i}: bid and ask must be finite numbers"
            )));
        }
    }

    Ok(Portfolio::from_vec(contracts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contract::contract;
    use crate::models::{Direction, OptionKind};

    fn call(strike: f64) -> Contract {
        contract(OptionKind::Call, Direction::Long, strike, 1.0, 2.0)
    }

    #[test]
    fn test_four_contracts_allowed() {
        let portfolio = validate_portfolio(vec![call(10.0); 4], 1000.0).unwrap();
        assert_eq!(portfolio.len(), 4);
        assert!(!portfolio.spilled());
    }

    #[test]
    fn test_five_contracts_rejected() {
        let err = validate_portfolio(vec![call(10.0); 5], 1000.0).unwrap_err();
        assert_eq!(err.to_string(), "Cannot process more than 4 options contracts");
    }

    #[test]
    fn test_empty_allowed() {
        assert!(validate_portfolio(Vec::new(), 1000.0).unwrap().is_empty());
    }

    #[test]
    fn test_negative_strike_rejected() {
        assert!(validate_portfolio(vec![call(-1.0)], 1000.0).is_err());
    }

    #[test]
    fn test_strike_above_limit_rejected() {
        assert!(validate_portfolio(vec![call(1000.5)], 1000.0).is_err());
        assert!(validate_portfolio(vec![call(1000.0)], 1000.0).is_ok());
    }

    #[test]
    fn test_crossed_market_not_rejected() {
        let c = contract(OptionKind::Put, Direction::Short, 50.0, 3.0, 2.0);
        assert!(validate_portfolio(vec![c], 1000.0).is_ok());
    }
}
