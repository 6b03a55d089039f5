//! Monthly net-profit range estimator.
//!
//! A pure, deterministic function of four financial inputs. The arithmetic
//! is a closed-form mock model: a capital-adequacy risk factor scales an
//! area- and score-proportional revenue, fixed and area-proportional costs
//! are subtracted, and a score-dependent volatility band produces the
//! lower/upper bounds.

use crate::domain::model::{FinancialInputs, ProfitEstimate};

/// Fit-out cost assumed per pyeong of floor area, in won.
pub const FIT_OUT_COST_PER_PYEONG: f64 = 1_500_000.0;
/// Rent deposit proxy: ten months of rent.
pub const DEPOSIT_MONTHS: f64 = 10.0;
/// Base monthly revenue per pyeong at a perfect score, in won.
pub const REVENUE_PER_PYEONG: f64 = 1_000_000.0;
/// Fixed monthly labor cost, in won.
pub const FIXED_LABOR_COST: f64 = 3_000_000.0;
/// Monthly utility cost per pyeong, in won.
pub const UTILITY_COST_PER_PYEONG: f64 = 50_000.0;
/// Revenue multiplier applied when the estimated initial investment
/// meets or exceeds the available capital.
pub const UNDERCAPITALIZED_RISK_FACTOR: f64 = 0.5;
/// Maximum revenue uplift earned by a capital surplus (20%).
pub const CAPITAL_CUSHION_UPLIFT: f64 = 0.2;
/// R-Score used when the caller supplies none and no ranking is available.
pub const DEFAULT_R_SCORE: f64 = 90.0;

/// Estimated up-front investment: a ten-month rent deposit plus per-pyeong
/// fit-out cost.
pub fn initial_investment(rent: f64, area_pyeong: f64) -> f64 {
    rent * DEPOSIT_MONTHS + area_pyeong * FIT_OUT_COST_PER_PYEONG
}

/// Simulates the monthly net-profit range for the given inputs.
///
/// Non-positive capital, rent, or area is a defined degenerate case and
/// returns `(0, 0)` rather than an error. Both bounds are truncated toward
/// zero. Only the lower bound is floored at zero; with a negative center
/// estimate the returned pair is inverted (`upper_bound < lower_bound`),
/// which downstream consumers must tolerate.
pub fn estimate(inputs: &FinancialInputs) -> ProfitEstimate {
    if inputs.capital <= 0.0 || inputs.rent <= 0.0 || inputs.area_pyeong <= 0.0 {
        return ProfitEstimate::zero();
    }

    let r_score = inputs.r_score.unwrap_or(DEFAULT_R_SCORE);

    let investment = initial_investment(inputs.rent, inputs.area_pyeong);
    let risk_factor = if investment >= inputs.capital {
        UNDERCAPITALIZED_RISK_FACTOR
    } else {
        1.0 + (inputs.capital - investment) / inputs.capital * CAPITAL_CUSHION_UPLIFT
    };

    let base_revenue = REVENUE_PER_PYEONG * inputs.area_pyeong * (r_score / 100.0);

    let utility_cost = UTILITY_COST_PER_PYEONG * inputs.area_pyeong;
    let total_monthly_expense = inputs.rent + FIXED_LABOR_COST + utility_cost;

    let center = base_revenue * risk_factor - total_monthly_expense;

    // Higher scores narrow the band: 0.3 at score 0 down to 0.2 at score 100.
    let volatility = 0.3 - (r_score / 100.0) * 0.1;

    let lower_bound = (center * (1.0 - volatility)).max(0.0);
    let upper_bound = center * (1.0 + volatility);

    ProfitEstimate {
        lower_bound: lower_bound as i64,
        upper_bound: upper_bound as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(capital: f64, rent: f64, area: f64, r_score: Option<f64>) -> FinancialInputs {
        FinancialInputs {
            capital,
            rent,
            area_pyeong: area,
            r_score,
        }
    }

    #[test]
    fn test_degenerate_inputs_return_zero_pair() {
        for bad in [
            inputs(0.0, 2_500_000.0, 15.0, None),
            inputs(-1.0, 2_500_000.0, 15.0, Some(92.0)),
            inputs(70_000_000.0, 0.0, 15.0, None),
            inputs(70_000_000.0, 2_500_000.0, 0.0, Some(0.0)),
        ] {
            assert_eq!(estimate(&bad), ProfitEstimate::zero());
        }
    }

    #[test]
    fn test_risk_factor_boundary_uses_undercapitalized_branch() {
        // capital exactly equals the initial investment: 10M deposit + 15M fit-out.
        let exact = inputs(25_000_000.0, 1_000_000.0, 10.0, Some(90.0));
        // revenue 9M * 0.5 = 4.5M, expense 1M + 3M + 0.5M = 4.5M, center 0.
        assert_eq!(estimate(&exact), ProfitEstimate::zero());
    }

    #[test]
    fn test_default_score_applies_when_unset() {
        let with_default = estimate(&inputs(70_000_000.0, 2_500_000.0, 15.0, None));
        let explicit = estimate(&inputs(70_000_000.0, 2_500_000.0, 15.0, Some(90.0)));
        assert_eq!(with_default, explicit);
    }
}
