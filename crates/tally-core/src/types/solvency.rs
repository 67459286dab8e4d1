//! Balance-sheet figures and solvency results.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};

/// Balance-sheet figures needed for a solvency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvencyInput {
    /// Current (working) assets.
    pub current_assets: Decimal,
    /// Short-term liabilities.
    pub current_liabilities: Decimal,
    /// Total debt of the firm.
    pub total_debt: Decimal,
    /// Total assets.
    pub total_assets: Decimal,
    /// Balance-sheet (net) profit.
    pub net_profit: Decimal,
    /// Total sales volume.
    pub total_sales: Decimal,
    /// Retained earnings.
    pub retained_earnings: Decimal,
    /// Firm capital.
    pub firm_capital: Decimal,
}

impl SolvencyInput {
    /// Field names, in input order.
    pub const FIELDS: [&'static str; 8] = [
        "current_assets",
        "current_liabilities",
        "total_debt",
        "total_assets",
        "net_profit",
        "total_sales",
        "retained_earnings",
        "firm_capital",
    ];

    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> SolvencyInputBuilder {
        SolvencyInputBuilder::new()
    }
}

/// Builder for [`SolvencyInput`] that reports the first missing figure.
#[derive(Debug, Clone, Default)]
pub struct SolvencyInputBuilder {
    current_assets: Option<Decimal>,
    current_liabilities: Option<Decimal>,
    total_debt: Option<Decimal>,
    total_assets: Option<Decimal>,
    net_profit: Option<Decimal>,
    total_sales: Option<Decimal>,
    retained_earnings: Option<Decimal>,
    firm_capital: Option<Decimal>,
}

impl SolvencyInputBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets current assets.
    #[must_use]
    pub fn current_assets(mut self, value: Decimal) -> Self {
        self.current_assets = Some(value);
        self
    }

    /// Sets current liabilities.
    #[must_use]
    pub fn current_liabilities(mut self, value: Decimal) -> Self {
        self.current_liabilities = Some(value);
        self
    }

    /// Sets total debt.
    #[must_use]
    pub fn total_debt(mut self, value: Decimal) -> Self {
        self.total_debt = Some(value);
        self
    }

    /// Sets total assets.
    #[must_use]
    pub fn total_assets(mut self, value: Decimal) -> Self {
        self.total_assets = Some(value);
        self
    }

    /// Sets net profit.
    #[must_use]
    pub fn net_profit(mut self, value: Decimal) -> Self {
        self.net_profit = Some(value);
        self
    }

    /// Sets total sales.
    #[must_use]
    pub fn total_sales(mut self, value: Decimal) -> Self {
        self.total_sales = Some(value);
        self
    }

    /// Sets retained earnings.
    #[must_use]
    pub fn retained_earnings(mut self, value: Decimal) -> Self {
        self.retained_earnings = Some(value);
        self
    }

    /// Sets firm capital.
    #[must_use]
    pub fn firm_capital(mut self, value: Decimal) -> Self {
        self.firm_capital = Some(value);
        self
    }

    /// Sets a figure by its field name (see [`SolvencyInput::FIELDS`]).
    pub fn set(mut self, field: &str, value: Decimal) -> TallyResult<Self> {
        let slot = match field {
            "current_assets" => &mut self.current_assets,
            "current_liabilities" => &mut self.current_liabilities,
            "total_debt" => &mut self.total_debt,
            "total_assets" => &mut self.total_assets,
            "net_profit" => &mut self.net_profit,
            "total_sales" => &mut self.total_sales,
            "retained_earnings" => &mut self.retained_earnings,
            "firm_capital" => &mut self.firm_capital,
            other => {
                return Err(TallyError::invalid_input(other, "unknown balance-sheet figure"));
            }
        };
        *slot = Some(value);
        Ok(self)
    }

    /// Builds the input, failing with `InvalidInput` on the first missing figure.
    pub fn build(self) -> TallyResult<SolvencyInput> {
        fn require(value: Option<Decimal>, field: &str) -> TallyResult<Decimal> {
            value.ok_or_else(|| TallyError::invalid_input(field, "value is missing"))
        }

        Ok(SolvencyInput {
            current_assets: require(self.current_assets, "current_assets")?,
            current_liabilities: require(self.current_liabilities, "current_liabilities")?,
            total_debt: require(self.total_debt, "total_debt")?,
            total_assets: require(self.total_assets, "total_assets")?,
            net_profit: require(self.net_profit, "net_profit")?,
            total_sales: require(self.total_sales, "total_sales")?,
            retained_earnings: require(self.retained_earnings, "retained_earnings")?,
            firm_capital: require(self.firm_capital, "firm_capital")?,
        })
    }
}

/// The four ratios combined into the solvency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvencyRatios {
    /// current assets / current liabilities
    #[serde(with = "rust_decimal::serde::str")]
    pub current_ratio: Decimal,
    /// total debt / total assets
    #[serde(with = "rust_decimal::serde::str")]
    pub debt_ratio: Decimal,
    /// net profit / total sales
    #[serde(with = "rust_decimal::serde::str")]
    pub profitability_ratio: Decimal,
    /// retained earnings / firm capital
    #[serde(with = "rust_decimal::serde::str")]
    pub accumulated_capital_ratio: Decimal,
}

/// Qualitative solvency tier, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Score at or below the distress threshold.
    Bankrupt,
    /// Score in the grey zone.
    AtRisk,
    /// Score above the safe threshold.
    Stable,
}

impl Verdict {
    /// Lower-case English label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bankrupt => "bankrupt",
            Self::AtRisk => "at risk",
            Self::Stable => "stable",
        }
    }

    /// Key used for display-string lookup.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bankrupt => "verdict.bankrupt",
            Self::AtRisk => "verdict.at_risk",
            Self::Stable => "verdict.stable",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A solvency score with its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvencyResult {
    /// Weighted Z-score.
    #[serde(with = "rust_decimal::serde::str")]
    pub score: Decimal,
    /// Verdict tier for the score.
    pub verdict: Verdict,
    /// Ratios the score was built from.
    pub ratios: SolvencyRatios,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_builder() -> SolvencyInputBuilder {
        SolvencyInput::builder()
            .current_assets(dec!(200))
            .current_liabilities(dec!(100))
            .total_debt(dec!(300))
            .total_assets(dec!(500))
            .net_profit(dec!(50))
            .total_sales(dec!(1000))
            .retained_earnings(dec!(80))
            .firm_capital(dec!(400))
    }

    #[test]
    fn test_builder() {
        let input = full_builder().build().unwrap();
        assert_eq!(input.current_assets, dec!(200));
        assert_eq!(input.firm_capital, dec!(400));
    }

    #[test]
    fn test_builder_missing_field() {
        let err = SolvencyInput::builder()
            .current_assets(dec!(1))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("current_liabilities"));
    }

    #[test]
    fn test_set_by_name() {
        let mut builder = SolvencyInput::builder();
        for (i, field) in SolvencyInput::FIELDS.iter().enumerate() {
            builder = builder.set(field, Decimal::from(i + 1)).unwrap();
        }
        let input = builder.build().unwrap();
        assert_eq!(input.total_debt, dec!(3));
        assert_eq!(input.firm_capital, dec!(8));

        assert!(SolvencyInput::builder().set("ebitda", dec!(1)).is_err());
    }

    #[test]
    fn test_verdict_order() {
        assert!(Verdict::Bankrupt < Verdict::AtRisk);
        assert!(Verdict::AtRisk < Verdict::Stable);
        assert_eq!(Verdict::AtRisk.to_string(), "at risk");
        assert_eq!(Verdict::Stable.key(), "verdict.stable");
    }
}
