//! Line item aggregation.

use rust_decimal::Decimal;
use tally_core::types::LineItemInput;
use tally_core::{LineItem, TallyError, TallyResult};
use tracing::{debug, warn};

/// Validates a sequence of drafts and computes each item's total cost.
///
/// Input order is preserved. The first invalid draft aborts the whole
/// sequence; no partial result is returned.
pub fn aggregate(inputs: &[LineItemInput]) -> TallyResult<Vec<LineItem>> {
    let items = inputs
        .iter()
        .map(LineItemInput::validate)
        .collect::<TallyResult<Vec<_>>>()?;

    debug!(items = items.len(), "aggregated line items");
    Ok(items)
}

/// Sums item costs, the denominator for every cumulative share.
///
/// Fails with `DegenerateInput` when there are no items or the sum is zero,
/// since shares of a zero total are undefined.
pub fn grand_total(items: &[LineItem]) -> TallyResult<Decimal> {
    if items.is_empty() {
        warn!("no line items to analyse");
        return Err(TallyError::degenerate("no line items"));
    }

    let total = items.iter().try_fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(item.total_cost())
            .ok_or_else(|| TallyError::invalid_input("total_cost", "grand total overflows"))
    })?;

    if total.is_zero() {
        warn!(items = items.len(), "grand total cost is zero");
        return Err(TallyError::degenerate("grand total cost is zero"));
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tally_core::ErrorKind;

    #[test]
    fn test_aggregate_preserves_order() {
        let items = aggregate(&[
            LineItemInput::new("M1", dec!(10), dec!(5)),
            LineItemInput::new("M2", dec!(2), dec!(50)),
            LineItemInput::new("M3", dec!(1), dec!(1)),
        ])
        .unwrap();

        let ids: Vec<&str> = items.iter().map(LineItem::id).collect();
        assert_eq!(ids, vec!["M1", "M2", "M3"]);

        let costs: Vec<_> = items.iter().map(LineItem::total_cost).collect();
        assert_eq!(costs, vec![dec!(50), dec!(100), dec!(1)]);
    }

    #[test]
    fn test_aggregate_rejects_negative() {
        let err = aggregate(&[
            LineItemInput::new("M1", dec!(10), dec!(5)),
            LineItemInput::new("M2", dec!(-2), dec!(50)),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("M2"));
    }

    #[test]
    fn test_aggregate_rejects_missing() {
        let err = aggregate(&[LineItemInput {
            id: "M9".into(),
            demand: Some(dec!(1)),
            unit_price: None,
        }])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_grand_total() {
        let items = aggregate(&[
            LineItemInput::new("M1", dec!(10), dec!(5)),
            LineItemInput::new("M2", dec!(2), dec!(50)),
        ])
        .unwrap();
        assert_eq!(grand_total(&items).unwrap(), dec!(150));
    }

    #[test]
    fn test_grand_total_degenerate() {
        let err = grand_total(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);

        let items = aggregate(&[LineItemInput::new("M1", dec!(0), dec!(5))]).unwrap();
        let err = grand_total(&items).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[]).unwrap().is_empty());
    }
}
