//! Material line items.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};

/// A validated material line item.
///
/// Demand and unit price are non-negative; the total cost is computed once
/// at construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    id: String,
    #[serde(with = "rust_decimal::serde::str")]
    demand: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    total_cost: Decimal,
}

impl LineItem {
    /// Creates a line item, computing `total_cost = demand * unit_price`.
    ///
    /// Fails with [`TallyError::InvalidInput`] if the identifier is blank,
    /// either figure is negative, or the product overflows.
    pub fn new(id: impl Into<String>, demand: Decimal, unit_price: Decimal) -> TallyResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TallyError::invalid_input("item_id", "identifier is blank"));
        }
        if demand.is_sign_negative() && !demand.is_zero() {
            return Err(TallyError::invalid_input(
                "demand",
                format!("{} must not be negative (item '{}')", demand, id),
            ));
        }
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(TallyError::invalid_input(
                "unit_price",
                format!("{} must not be negative (item '{}')", unit_price, id),
            ));
        }
        let total_cost = demand.checked_mul(unit_price).ok_or_else(|| {
            TallyError::invalid_input(
                "total_cost",
                format!("demand x unit price overflows (item '{}')", id),
            )
        })?;

        Ok(Self {
            id,
            demand,
            unit_price,
            total_cost,
        })
    }

    /// Item identifier (material code).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Annual demand.
    pub fn demand(&self) -> Decimal {
        self.demand
    }

    /// Price per unit.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Annual cost of the item.
    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }
}

/// Unvalidated line item as collected by a front end.
///
/// Missing figures are `None`; [`LineItemInput::validate`] turns the draft
/// into a [`LineItem`] or reports which field is wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Item identifier.
    pub id: String,
    /// Annual demand, if supplied.
    pub demand: Option<Decimal>,
    /// Unit price, if supplied.
    pub unit_price: Option<Decimal>,
}

impl LineItemInput {
    /// Creates a fully populated draft.
    #[must_use]
    pub fn new(id: impl Into<String>, demand: Decimal, unit_price: Decimal) -> Self {
        Self {
            id: id.into(),
            demand: Some(demand),
            unit_price: Some(unit_price),
        }
    }

    /// Validates the draft into a [`LineItem`].
    pub fn validate(&self) -> TallyResult<LineItem> {
        let demand = self.demand.ok_or_else(|| {
            TallyError::invalid_input("demand", format!("missing for item '{}'", self.id))
        })?;
        let unit_price = self.unit_price.ok_or_else(|| {
            TallyError::invalid_input("unit_price", format!("missing for item '{}'", self.id))
        })?;
        LineItem::new(self.id.clone(), demand, unit_price)
    }
}

/// Parses a user-entered figure.
///
/// Accepts plain decimals (`12.5`) and scientific notation (`1.25e1`),
/// ignoring surrounding whitespace. Empty text is reported as missing.
pub fn parse_figure(field: &str, text: &str) -> TallyResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TallyError::invalid_input(field, "value is missing"));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| TallyError::invalid_input(field, format!("'{}' is not a number", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_cost() {
        let item = LineItem::new("M1", dec!(10), dec!(5)).unwrap();
        assert_eq!(item.id(), "M1");
        assert_eq!(item.total_cost(), dec!(50));

        let free = LineItem::new("M0", dec!(3), Decimal::ZERO).unwrap();
        assert_eq!(free.total_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_figures_rejected() {
        let err = LineItem::new("M1", dec!(-1), dec!(5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("demand"));

        let err = LineItem::new("M1", dec!(1), dec!(-0.01)).unwrap_err();
        assert!(err.to_string().contains("unit_price"));
    }

    #[test]
    fn test_negative_zero_accepted() {
        let item = LineItem::new("M1", -Decimal::ZERO, dec!(5)).unwrap();
        assert!(item.total_cost().is_zero());
    }

    #[test]
    fn test_blank_id_rejected() {
        let err = LineItem::new("   ", dec!(1), dec!(1)).unwrap_err();
        assert!(err.to_string().contains("item_id"));
    }

    #[test]
    fn test_overflow_rejected() {
        let err = LineItem::new("BIG", Decimal::MAX, dec!(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_input_missing_fields() {
        let draft = LineItemInput {
            id: "M7".into(),
            demand: None,
            unit_price: Some(dec!(2)),
        };
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("demand"));
        assert!(err.to_string().contains("M7"));

        let draft = LineItemInput {
            id: "M8".into(),
            demand: Some(dec!(2)),
            unit_price: None,
        };
        assert!(draft.validate().unwrap_err().to_string().contains("unit_price"));
    }

    #[test]
    fn test_parse_figure() {
        assert_eq!(parse_figure("demand", " 12.5 ").unwrap(), dec!(12.5));
        assert_eq!(parse_figure("demand", "1.25e1").unwrap(), dec!(12.5));
        assert_eq!(parse_figure("demand", "-3").unwrap(), dec!(-3));

        let err = parse_figure("demand", "").unwrap_err();
        assert!(err.to_string().contains("missing"));

        let err = parse_figure("unit_price", "ten").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("'ten' is not a number"));
    }
}
