//! ABC classification by cumulative cost share.
//!
//! Items are ranked by total cost, most expensive first, and each item is
//! placed in a band according to the cumulative share of cost reached once
//! it is included:
//!
//! ```text
//! (0, 70]   -> A
//! (70, 90]  -> B
//! (90, 100] -> C
//! ```
//!
//! A share sitting exactly on a boundary belongs to the lower band.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_core::types::{AbcCategory, AbcClassification, ClassifiedLineItem};
use tally_core::{LineItem, TallyResult};
use tracing::debug;

use crate::aggregate::grand_total;

/// Upper cumulative percentage of band A (inclusive).
pub const A_UPPER_PCT: Decimal = dec!(70);

/// Upper cumulative percentage of band B (inclusive).
pub const B_UPPER_PCT: Decimal = dec!(90);

/// Tolerance applied to band boundaries.
pub const BAND_EPSILON: Decimal = dec!(0.000000001);

/// Category for a cumulative cost percentage.
#[must_use]
pub fn category_for(cumulative_pct: Decimal) -> AbcCategory {
    if cumulative_pct <= A_UPPER_PCT + BAND_EPSILON {
        AbcCategory::A
    } else if cumulative_pct <= B_UPPER_PCT + BAND_EPSILON {
        AbcCategory::B
    } else {
        AbcCategory::C
    }
}

/// Classifies line items into A/B/C categories.
///
/// The result lists items in descending-cost order; equal costs keep their
/// input order. Fails with `DegenerateInput` if `items` is empty or the grand
/// total cost is zero.
///
/// # Example
///
/// ```rust
/// use tally_analytics::classify;
/// use tally_core::types::{AbcCategory, LineItem};
/// use rust_decimal_macros::dec;
///
/// let items = vec![
///     LineItem::new("M1", dec!(7), dec!(10)).unwrap(),
///     LineItem::new("M2", dec!(3), dec!(10)).unwrap(),
/// ];
/// let table = classify(&items).unwrap();
/// assert_eq!(table.items()[0].category, AbcCategory::A);
/// assert_eq!(table.items()[1].category, AbcCategory::C);
/// ```
pub fn classify(items: &[LineItem]) -> TallyResult<AbcClassification> {
    let total = grand_total(items)?;

    let mut ranked: Vec<&LineItem> = items.iter().collect();
    ranked.sort_by(|a, b| b.total_cost().cmp(&a.total_cost()));

    let mut cumulative = Decimal::ZERO;
    let classified: Vec<ClassifiedLineItem> = ranked
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            cumulative += item.total_cost();
            let cumulative_pct = cumulative / total * Decimal::ONE_HUNDRED;
            ClassifiedLineItem {
                item: item.clone(),
                rank: index + 1,
                cumulative_cost: cumulative,
                cumulative_pct,
                category: category_for(cumulative_pct),
            }
        })
        .collect();

    let table = AbcClassification::new(classified, total);
    debug!(
        items = table.len(),
        grand_total = %total,
        a = table.count(AbcCategory::A),
        b = table.count(AbcCategory::B),
        c = table.count(AbcCategory::C),
        "classified line items"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::ErrorKind;

    fn item(id: &str, demand: Decimal, price: Decimal) -> LineItem {
        LineItem::new(id, demand, price).unwrap()
    }

    #[test]
    fn test_category_bands() {
        assert_eq!(category_for(dec!(0.5)), AbcCategory::A);
        assert_eq!(category_for(dec!(70)), AbcCategory::A);
        assert_eq!(category_for(dec!(70.0001)), AbcCategory::B);
        assert_eq!(category_for(dec!(90)), AbcCategory::B);
        assert_eq!(category_for(dec!(90.0001)), AbcCategory::C);
        assert_eq!(category_for(dec!(100)), AbcCategory::C);
    }

    #[test]
    fn test_boundary_within_epsilon() {
        assert_eq!(category_for(dec!(70.0000000005)), AbcCategory::A);
        assert_eq!(category_for(dec!(90.0000000005)), AbcCategory::B);
    }

    #[test]
    fn test_worked_example() {
        let items = vec![
            item("M1", dec!(10), dec!(5)),
            item("M2", dec!(2), dec!(50)),
            item("M3", dec!(1), dec!(1)),
        ];
        let table = classify(&items).unwrap();
        assert_eq!(table.grand_total(), dec!(151));

        let rows = table.items();
        assert_eq!(rows[0].item.id(), "M2");
        assert_eq!(rows[0].cumulative_cost, dec!(100));
        assert_eq!(rows[0].cumulative_pct.round_dp(4), dec!(66.2252));
        assert_eq!(rows[0].category, AbcCategory::A);

        assert_eq!(rows[1].item.id(), "M1");
        assert_eq!(rows[1].cumulative_cost, dec!(150));
        assert_eq!(rows[1].cumulative_pct.round_dp(4), dec!(99.3377));
        assert_eq!(rows[1].category, AbcCategory::C);

        assert_eq!(rows[2].item.id(), "M3");
        assert_eq!(rows[2].cumulative_pct, dec!(100));
        assert_eq!(rows[2].category, AbcCategory::C);
    }

    #[test]
    fn test_exact_boundaries() {
        let items = vec![
            item("A1", dec!(70), dec!(1)),
            item("B1", dec!(20), dec!(1)),
            item("C1", dec!(10), dec!(1)),
        ];
        let table = classify(&items).unwrap();
        let rows = table.items();
        assert_eq!(rows[0].cumulative_pct, dec!(70));
        assert_eq!(rows[0].category, AbcCategory::A);
        assert_eq!(rows[1].cumulative_pct, dec!(90));
        assert_eq!(rows[1].category, AbcCategory::B);
        assert_eq!(rows[2].category, AbcCategory::C);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            item("X", dec!(1), dec!(10)),
            item("Y", dec!(2), dec!(5)),
            item("Z", dec!(10), dec!(1)),
        ];
        let table = classify(&items).unwrap();
        let ids: Vec<&str> = table.items().iter().map(|c| c.item.id()).collect();
        assert_eq!(ids, vec!["X", "Y", "Z"]);
        let ranks: Vec<usize> = table.items().iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_item() {
        let table = classify(&[item("ONLY", dec!(3), dec!(4))]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.items()[0].cumulative_pct, dec!(100));
        assert_eq!(table.items()[0].category, AbcCategory::C);
    }

    #[test]
    fn test_zero_cost_items_ranked_last() {
        let items = vec![
            item("FREE", dec!(5), Decimal::ZERO),
            item("PAID", dec!(5), dec!(2)),
        ];
        let table = classify(&items).unwrap();
        assert_eq!(table.items()[0].item.id(), "PAID");
        assert_eq!(table.items()[1].item.id(), "FREE");
        assert_eq!(table.items()[1].cumulative_pct, dec!(100));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(classify(&[]).unwrap_err().kind(), ErrorKind::DegenerateInput);

        let zeros = vec![item("Z1", dec!(0), dec!(3)), item("Z2", dec!(4), dec!(0))];
        assert_eq!(
            classify(&zeros).unwrap_err().kind(),
            ErrorKind::DegenerateInput
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        let items = vec![
            item("M1", dec!(10), dec!(5)),
            item("M2", dec!(2), dec!(50)),
            item("M3", dec!(1), dec!(1)),
        ];
        let snapshot = items.clone();
        let first = classify(&items).unwrap();
        let second = classify(&items).unwrap();
        assert_eq!(first, second);
        assert_eq!(items, snapshot);
    }
}
