//! Solvency scoring (Altman-style Z).
//!
//! ```text
//! Z = 1.2 * current_ratio
//!   + 1.4 * accumulated_capital_ratio
//!   + 3.3 * profitability_ratio
//!   + 0.6 * debt_ratio
//! ```
//!
//! | Z              | Verdict  |
//! |----------------|----------|
//! | `> 2.5`        | stable   |
//! | `(1.8, 2.5]`   | at risk  |
//! | `<= 1.8`       | bankrupt |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_core::types::{SolvencyInput, SolvencyRatios, SolvencyResult, Verdict};
use tally_core::{TallyError, TallyResult};
use tracing::debug;

/// Scores strictly above this are stable.
pub const STABLE_FLOOR: Decimal = dec!(2.5);

/// Scores strictly above this (and not stable) are at risk.
pub const AT_RISK_FLOOR: Decimal = dec!(1.8);

const CURRENT_WEIGHT: Decimal = dec!(1.2);
const ACCUMULATED_CAPITAL_WEIGHT: Decimal = dec!(1.4);
const PROFITABILITY_WEIGHT: Decimal = dec!(3.3);
const DEBT_WEIGHT: Decimal = dec!(0.6);

fn safe_div(numerator: Decimal, denominator: Decimal, ratio: &str) -> TallyResult<Decimal> {
    if denominator.is_zero() {
        return Err(TallyError::division_by_zero(ratio));
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| TallyError::invalid_input(ratio, "ratio overflows"))
}

/// Computes the four ratios behind the score.
///
/// Fails with `DivisionByZero` naming the first ratio whose denominator is
/// zero.
pub fn solvency_ratios(input: &SolvencyInput) -> TallyResult<SolvencyRatios> {
    Ok(SolvencyRatios {
        current_ratio: safe_div(
            input.current_assets,
            input.current_liabilities,
            "current ratio",
        )?,
        debt_ratio: safe_div(input.total_debt, input.total_assets, "debt ratio")?,
        profitability_ratio: safe_div(
            input.net_profit,
            input.total_sales,
            "profitability ratio",
        )?,
        accumulated_capital_ratio: safe_div(
            input.retained_earnings,
            input.firm_capital,
            "accumulated capital ratio",
        )?,
    })
}

/// Verdict tier for a score.
#[must_use]
pub fn verdict_for(score: Decimal) -> Verdict {
    if score > STABLE_FLOOR {
        Verdict::Stable
    } else if score > AT_RISK_FLOOR {
        Verdict::AtRisk
    } else {
        Verdict::Bankrupt
    }
}

/// Scores a firm's solvency from its balance-sheet figures.
///
/// # Example
///
/// ```rust
/// use tally_analytics::score_solvency;
/// use tally_core::types::{SolvencyInput, Verdict};
/// use rust_decimal_macros::dec;
///
/// let input = SolvencyInput::builder()
///     .current_assets(dec!(200))
///     .current_liabilities(dec!(100))
///     .total_debt(dec!(300))
///     .total_assets(dec!(500))
///     .net_profit(dec!(50))
///     .total_sales(dec!(1000))
///     .retained_earnings(dec!(80))
///     .firm_capital(dec!(400))
///     .build()
///     .unwrap();
///
/// let result = score_solvency(&input).unwrap();
/// assert_eq!(result.score, dec!(3.205));
/// assert_eq!(result.verdict, Verdict::Stable);
/// ```
pub fn score_solvency(input: &SolvencyInput) -> TallyResult<SolvencyResult> {
    let ratios = solvency_ratios(input)?;

    let score = [
        (CURRENT_WEIGHT, ratios.current_ratio),
        (ACCUMULATED_CAPITAL_WEIGHT, ratios.accumulated_capital_ratio),
        (PROFITABILITY_WEIGHT, ratios.profitability_ratio),
        (DEBT_WEIGHT, ratios.debt_ratio),
    ]
    .iter()
    .try_fold(Decimal::ZERO, |acc, (weight, ratio)| {
        weight
            .checked_mul(*ratio)
            .and_then(|term| acc.checked_add(term))
            .ok_or_else(|| TallyError::invalid_input("score", "score overflows"))
    })?;

    let verdict = verdict_for(score);
    debug!(score = %score, verdict = %verdict, "scored solvency");

    Ok(SolvencyResult {
        score,
        verdict,
        ratios,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::ErrorKind;

    fn reference_input() -> SolvencyInput {
        SolvencyInput {
            current_assets: dec!(200),
            current_liabilities: dec!(100),
            total_debt: dec!(300),
            total_assets: dec!(500),
            net_profit: dec!(50),
            total_sales: dec!(1000),
            retained_earnings: dec!(80),
            firm_capital: dec!(400),
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = score_solvency(&reference_input()).unwrap();
        assert_eq!(result.ratios.current_ratio, dec!(2));
        assert_eq!(result.ratios.debt_ratio, dec!(0.6));
        assert_eq!(result.ratios.profitability_ratio, dec!(0.05));
        assert_eq!(result.ratios.accumulated_capital_ratio, dec!(0.2));
        assert_eq!(result.score, dec!(3.205));
        assert_eq!(result.verdict, Verdict::Stable);
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(verdict_for(dec!(2.5001)), Verdict::Stable);
        assert_eq!(verdict_for(dec!(2.5)), Verdict::AtRisk);
        assert_eq!(verdict_for(dec!(1.8001)), Verdict::AtRisk);
        assert_eq!(verdict_for(dec!(1.8)), Verdict::Bankrupt);
        assert_eq!(verdict_for(dec!(-4)), Verdict::Bankrupt);
    }

    #[test]
    fn test_at_risk_scenario() {
        // 1.2*1.5 + 1.4*0.1 + 3.3*0.02 + 0.6*0.4 = 2.246
        let input = SolvencyInput {
            current_assets: dec!(150),
            current_liabilities: dec!(100),
            total_debt: dec!(200),
            total_assets: dec!(500),
            net_profit: dec!(20),
            total_sales: dec!(1000),
            retained_earnings: dec!(40),
            firm_capital: dec!(400),
        };
        let result = score_solvency(&input).unwrap();
        assert_eq!(result.score, dec!(2.246));
        assert_eq!(result.verdict, Verdict::AtRisk);
    }

    #[test]
    fn test_bankrupt_scenario() {
        // 1.2*0.5 + 1.4*(-0.25) + 3.3*(-0.1) + 0.6*0.9 = 0.46
        let input = SolvencyInput {
            current_assets: dec!(50),
            current_liabilities: dec!(100),
            total_debt: dec!(450),
            total_assets: dec!(500),
            net_profit: dec!(-100),
            total_sales: dec!(1000),
            retained_earnings: dec!(-100),
            firm_capital: dec!(400),
        };
        let result = score_solvency(&input).unwrap();
        assert_eq!(result.score, dec!(0.46));
        assert_eq!(result.verdict, Verdict::Bankrupt);
    }

    #[test]
    fn test_zero_denominators() {
        let cases = [
            (
                "current ratio",
                SolvencyInput {
                    current_liabilities: Decimal::ZERO,
                    ..reference_input()
                },
            ),
            (
                "debt ratio",
                SolvencyInput {
                    total_assets: Decimal::ZERO,
                    ..reference_input()
                },
            ),
            (
                "profitability ratio",
                SolvencyInput {
                    total_sales: Decimal::ZERO,
                    ..reference_input()
                },
            ),
            (
                "accumulated capital ratio",
                SolvencyInput {
                    firm_capital: Decimal::ZERO,
                    ..reference_input()
                },
            ),
        ];

        for (ratio, input) in cases {
            let err = score_solvency(&input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DivisionByZero);
            assert_eq!(err, TallyError::division_by_zero(ratio));
        }
    }
}
