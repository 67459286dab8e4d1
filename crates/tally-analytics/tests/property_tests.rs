//! Property-based tests for classification and Lorenz invariants.
//!
//! These tests verify properties that should hold for any item set with a
//! positive grand total:
//! - Classification is a permutation of the input
//! - Cumulative percentage is non-decreasing and ends at 100
//! - Every item receives exactly one category
//! - The Lorenz curve ends at (1, 1)
//! - Results do not depend on input order

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_analytics::prelude::*;
use tally_analytics::{category_for, BAND_EPSILON};

// =============================================================================
// GENERATORS
// =============================================================================

/// Line items with small integral demand and cent-precision prices.
fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec((0u32..1_000, 0u32..100_000), 1..40)
        .prop_filter("grand total must be positive", |figures| {
            figures.iter().any(|(d, p)| *d > 0 && *p > 0)
        })
        .prop_map(|figures| {
            figures
                .into_iter()
                .enumerate()
                .map(|(i, (demand, cents))| {
                    LineItem::new(
                        format!("M{}", i + 1),
                        Decimal::from(demand),
                        Decimal::new(i64::from(cents), 2),
                    )
                    .unwrap()
                })
                .collect()
        })
}

fn sorted_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut ids: Vec<&str> = ids.collect();
    ids.sort_unstable();
    ids
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn classification_is_permutation(items in arb_items()) {
        let table = classify(&items).unwrap();
        prop_assert_eq!(table.len(), items.len());
        prop_assert_eq!(
            sorted_ids(table.items().iter().map(|c| c.item.id())),
            sorted_ids(items.iter().map(LineItem::id))
        );
    }

    #[test]
    fn cumulative_pct_monotone_and_complete(items in arb_items()) {
        let table = classify(&items).unwrap();
        let rows = table.items();

        for pair in rows.windows(2) {
            prop_assert!(pair[1].cumulative_pct >= pair[0].cumulative_pct);
            prop_assert!(pair[1].item.total_cost() <= pair[0].item.total_cost());
        }

        let last = rows.last().unwrap().cumulative_pct;
        prop_assert!((last - Decimal::ONE_HUNDRED).abs() < BAND_EPSILON);
    }

    #[test]
    fn categories_partition_items(items in arb_items()) {
        let table = classify(&items).unwrap();
        let counted: usize = AbcCategory::ALL.iter().map(|c| table.count(*c)).sum();
        prop_assert_eq!(counted, items.len());

        for row in table.items() {
            prop_assert_eq!(row.category, category_for(row.cumulative_pct));
        }

        // Categories never improve further down the ranking.
        for pair in table.items().windows(2) {
            prop_assert!(pair[1].category >= pair[0].category);
        }
    }

    #[test]
    fn lorenz_ends_at_one_one(items in arb_items()) {
        let curve = build_lorenz_curve(&items).unwrap();
        prop_assert_eq!(curve.len(), items.len());

        let last = curve.last().unwrap();
        prop_assert!((last.x - 1.0).abs() < 1e-9);
        prop_assert!((last.y - 1.0).abs() < 1e-9);

        for pair in curve.points().windows(2) {
            prop_assert!(pair[1].x > pair[0].x);
            prop_assert!(pair[1].y >= pair[0].y);
        }
        for point in curve.points() {
            prop_assert!(point.x > 0.0 && point.x <= 1.0);
            prop_assert!((0.0..=1.0).contains(&point.y));
        }
    }

    #[test]
    fn lorenz_stays_below_equality_line(items in arb_items()) {
        let curve = build_lorenz_curve(&items).unwrap();
        for point in curve.points() {
            prop_assert!(point.y <= point.x + 1e-9);
        }
    }

    #[test]
    fn classify_is_idempotent(items in arb_items()) {
        let first = classify(&items).unwrap();
        let second = classify(&items).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn results_independent_of_input_order(items in arb_items()) {
        let mut reversed = items.clone();
        reversed.reverse();

        let forward = classify(&items).unwrap();
        let backward = classify(&reversed).unwrap();

        let mut forward_pairs: Vec<(Decimal, AbcCategory)> = forward
            .items()
            .iter()
            .map(|c| (c.cumulative_pct, c.category))
            .collect();
        let mut backward_pairs: Vec<(Decimal, AbcCategory)> = backward
            .items()
            .iter()
            .map(|c| (c.cumulative_pct, c.category))
            .collect();
        forward_pairs.sort();
        backward_pairs.sort();
        prop_assert_eq!(forward_pairs, backward_pairs);

        let forward_curve = build_lorenz_curve(&items).unwrap();
        let backward_curve = build_lorenz_curve(&reversed).unwrap();
        prop_assert_eq!(forward_curve, backward_curve);
    }
}
