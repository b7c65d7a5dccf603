//! Fee-aware break-even pricing for a single position.
//!
//! The exchange takes a symmetric percentage fee on both the buy and the
//! sell. Given an invested amount and a desired net profit, this computes
//! the unit price at which selling the acquired units nets exactly that
//! profit after both fees.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Fee rate must satisfy `0 <= fee < 100`; at 100 the exit fee
    /// consumes the whole sale and no exit price exists.
    #[error("invalid fee rate: {0}% (must be at least 0 and below 100)")]
    InvalidFee(f64),
    #[error("invalid reference price: {0} (must be positive)")]
    InvalidPrice(f64),
    #[error("invalid investment: {0} (must be positive)")]
    InvalidInvestment(f64),
}

/// Inputs for one break-even calculation. Built from CLI flags plus the
/// live price of the chosen asset; never stored anywhere.
#[derive(Debug, Clone, Copy)]
pub struct BreakEvenRequest {
    pub investment: f64,
    /// Desired net profit. May be zero or negative (a stop-loss target).
    pub target_net_profit: f64,
    /// Percentage fee charged on entry and again on exit.
    pub fee_rate_percent: f64,
    pub reference_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakEvenTarget {
    /// Unit price at which selling nets `investment + target_net_profit`.
    pub exit_price: f64,
    /// Percentage move from the reference price to the exit price.
    pub required_move_pct: f64,
}

/// Computes the exit price that realizes the requested net profit.
///
/// Units acquired are reduced by the entry fee, and the sale proceeds must
/// cover the exit fee on top of the target amount:
///
/// ```text
/// net_units    = investment * (1 - fee) / reference_price
/// gross_needed = (investment + target_net_profit) / (1 - fee)
/// exit_price   = gross_needed / net_units
/// ```
///
/// All inputs are validated up front; the function never returns NaN or
/// infinity for an `Ok` result.
pub fn compute_break_even(req: &BreakEvenRequest) -> Result<BreakEvenTarget, PricingError> {
    if !(0.0..100.0).contains(&req.fee_rate_percent) || !req.fee_rate_percent.is_finite() {
        return Err(PricingError::InvalidFee(req.fee_rate_percent));
    }
    if !(req.reference_price > 0.0) || !req.reference_price.is_finite() {
        return Err(PricingError::InvalidPrice(req.reference_price));
    }
    if !(req.investment > 0.0) || !req.investment.is_finite() {
        return Err(PricingError::InvalidInvestment(req.investment));
    }

    let fee_fraction = req.fee_rate_percent / 100.0;
    let net_units = req.investment * (1.0 - fee_fraction) / req.reference_price;
    let gross_needed = (req.investment + req.target_net_profit) / (1.0 - fee_fraction);
    let exit_price = gross_needed / net_units;
    let required_move_pct = ((exit_price - req.reference_price) / req.reference_price) * 100.0;

    Ok(BreakEvenTarget {
        exit_price,
        required_move_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(investment: f64, profit: f64, fee: f64, price: f64) -> BreakEvenRequest {
        BreakEvenRequest {
            investment,
            target_net_profit: profit,
            fee_rate_percent: fee,
            reference_price: price,
        }
    }

    /// Buys at the reference price, sells at the exit price, applying both
    /// fees. Should land back on `investment + target_net_profit`.
    fn net_proceeds(req: &BreakEvenRequest, exit_price: f64) -> f64 {
        let fee = req.fee_rate_percent / 100.0;
        let units = req.investment * (1.0 - fee) / req.reference_price;
        units * exit_price * (1.0 - fee)
    }

    #[test]
    fn documented_scenario() {
        let req = request(100.0, 20.0, 0.1, 50000.0);
        let target = compute_break_even(&req).unwrap();

        // net units = 99.9 / 50000 = 0.001998; gross = 120 / 0.999
        // exit = 50000 * 1.2 / 0.999^2
        let expected = 50000.0 * 1.2 / (0.999f64 * 0.999);
        assert!((target.exit_price - expected).abs() < 1e-9);
        assert!((target.exit_price - 60120.18).abs() < 0.01);
        assert!((target.required_move_pct - 20.2404).abs() < 0.001);
    }

    #[test]
    fn round_trip_reproduces_target_profit() {
        let cases = [
            request(100.0, 20.0, 0.1, 50000.0),
            request(2500.0, -100.0, 0.25, 1.37),
            request(1.0, 0.0, 5.0, 0.0001),
            request(1_000_000.0, 42.0, 99.9, 320.0),
        ];
        for req in cases {
            let target = compute_break_even(&req).unwrap();
            assert!(target.exit_price.is_finite() && target.exit_price > 0.0);

            let netted = net_proceeds(&req, target.exit_price);
            let expected = req.investment + req.target_net_profit;
            let tolerance = 1e-9 * expected.abs().max(1.0);
            assert!(
                (netted - expected).abs() < tolerance,
                "round trip failed: netted {netted}, expected {expected}"
            );
        }
    }

    #[test]
    fn exit_price_is_strictly_monotonic_in_profit() {
        let mut last = f64::NEG_INFINITY;
        for profit in [-50.0, -10.0, 0.0, 10.0, 50.0, 500.0] {
            let target = compute_break_even(&request(100.0, profit, 0.1, 50000.0)).unwrap();
            assert!(target.exit_price > last);
            last = target.exit_price;
        }
    }

    #[test]
    fn exit_price_is_strictly_monotonic_in_fee() {
        let mut last = f64::NEG_INFINITY;
        for fee in [0.0, 0.1, 0.5, 1.0, 10.0, 50.0] {
            let target = compute_break_even(&request(100.0, 20.0, fee, 50000.0)).unwrap();
            assert!(target.exit_price > last);
            last = target.exit_price;
        }
    }

    #[test]
    fn zero_fee_reduces_to_simple_proportion() {
        let req = request(200.0, 50.0, 0.0, 123.45);
        let target = compute_break_even(&req).unwrap();
        let expected = req.reference_price * (req.investment + req.target_net_profit)
            / req.investment;
        assert_eq!(target.exit_price, expected);
    }

    #[test]
    fn full_fee_is_rejected_not_infinite() {
        let result = compute_break_even(&request(100.0, 20.0, 100.0, 50000.0));
        assert_eq!(result.unwrap_err(), PricingError::InvalidFee(100.0));
    }

    #[test]
    fn negative_fee_is_rejected() {
        let result = compute_break_even(&request(100.0, 20.0, -0.1, 50000.0));
        assert_eq!(result.unwrap_err(), PricingError::InvalidFee(-0.1));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let result = compute_break_even(&request(100.0, 20.0, 0.1, 0.0));
        assert_eq!(result.unwrap_err(), PricingError::InvalidPrice(0.0));
        let result = compute_break_even(&request(100.0, 20.0, 0.1, -3.0));
        assert_eq!(result.unwrap_err(), PricingError::InvalidPrice(-3.0));
    }

    #[test]
    fn non_positive_investment_is_rejected() {
        let result = compute_break_even(&request(0.0, 20.0, 0.1, 50000.0));
        assert_eq!(result.unwrap_err(), PricingError::InvalidInvestment(0.0));
        let result = compute_break_even(&request(-5.0, 20.0, 0.1, 50000.0));
        assert_eq!(result.unwrap_err(), PricingError::InvalidInvestment(-5.0));
    }

    #[test]
    fn negative_target_profit_models_a_stop_loss() {
        let req = request(100.0, -20.0, 0.1, 50000.0);
        let target = compute_break_even(&req).unwrap();
        assert!(target.exit_price < req.reference_price);
        assert!(target.required_move_pct < 0.0);
    }
}
