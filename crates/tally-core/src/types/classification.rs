//! ABC classification results.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;
use crate::error::TallyError;

/// ABC inventory category.
///
/// `A` items carry the first 70% of cumulative cost, `B` the next 20%,
/// `C` the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcCategory {
    /// High-value items.
    A,
    /// Intermediate items.
    B,
    /// Low-value items.
    C,
}

impl AbcCategory {
    /// All categories in order.
    pub const ALL: [AbcCategory; 3] = [AbcCategory::A, AbcCategory::B, AbcCategory::C];

    /// Single-letter label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for AbcCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AbcCategory {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            other => Err(TallyError::invalid_input(
                "category",
                format!("unknown category '{}'", other),
            )),
        }
    }
}

/// Direction for cost-ordered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Cheapest first.
    Ascending,
    /// Most expensive first (classification order).
    #[default]
    Descending,
}

/// A line item annotated with its ABC rank and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLineItem {
    /// The underlying item.
    #[serde(flatten)]
    pub item: LineItem,
    /// 1-based position in descending-cost order.
    pub rank: usize,
    /// Running cost sum up to and including this item.
    #[serde(with = "rust_decimal::serde::str")]
    pub cumulative_cost: Decimal,
    /// `100 * cumulative_cost / grand_total`.
    #[serde(with = "rust_decimal::serde::str")]
    pub cumulative_pct: Decimal,
    /// Assigned category.
    pub category: AbcCategory,
}

/// One row of the classification export.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// Item identifier.
    pub item_id: String,
    /// Annual demand.
    #[serde(with = "rust_decimal::serde::str")]
    pub demand: Decimal,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    /// Annual cost.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
    /// Assigned category.
    pub category: AbcCategory,
}

/// Aggregate figures for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// The category.
    pub category: AbcCategory,
    /// Number of items in the category.
    pub item_count: usize,
    /// Sum of item costs in the category.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
    /// Category cost as a percentage of the grand total.
    #[serde(with = "rust_decimal::serde::str")]
    pub cost_share_pct: Decimal,
    /// Category item count as a percentage of all items.
    #[serde(with = "rust_decimal::serde::str")]
    pub item_share_pct: Decimal,
}

/// An immutable ABC classification table.
///
/// Items are stored in descending-cost order. Re-ordering for display goes
/// through [`AbcClassification::sorted_by_cost`], which never recomputes
/// ranks or categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbcClassification {
    items: Vec<ClassifiedLineItem>,
    #[serde(with = "rust_decimal::serde::str")]
    grand_total: Decimal,
}

impl AbcClassification {
    /// Wraps a classified table. Items must already be in descending-cost order.
    #[must_use]
    pub fn new(items: Vec<ClassifiedLineItem>, grand_total: Decimal) -> Self {
        Self { items, grand_total }
    }

    /// Items in descending-cost order.
    pub fn items(&self) -> &[ClassifiedLineItem] {
        &self.items
    }

    /// Sum of all item costs.
    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    /// Number of classified items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the table has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items ordered by total cost.
    ///
    /// Equal costs keep their rank order in both directions.
    #[must_use]
    pub fn sorted_by_cost(&self, order: SortOrder) -> Vec<&ClassifiedLineItem> {
        let mut view: Vec<&ClassifiedLineItem> = self.items.iter().collect();
        match order {
            SortOrder::Descending => {
                view.sort_by(|a, b| b.item.total_cost().cmp(&a.item.total_cost()));
            }
            SortOrder::Ascending => {
                view.sort_by(|a, b| a.item.total_cost().cmp(&b.item.total_cost()));
            }
        }
        view
    }

    /// Items belonging to a category, in rank order.
    pub fn in_category(&self, category: AbcCategory) -> impl Iterator<Item = &ClassifiedLineItem> {
        self.items.iter().filter(move |c| c.category == category)
    }

    /// Number of items in a category.
    pub fn count(&self, category: AbcCategory) -> usize {
        self.in_category(category).count()
    }

    /// Per-category totals, always one entry for each of A, B and C.
    #[must_use]
    pub fn summary(&self) -> Vec<CategorySummary> {
        let hundred = Decimal::ONE_HUNDRED;
        let n = Decimal::from(self.items.len());

        AbcCategory::ALL
            .iter()
            .map(|&category| {
                let (item_count, total_cost) = self
                    .in_category(category)
                    .fold((0usize, Decimal::ZERO), |(count, cost), c| {
                        (count + 1, cost + c.item.total_cost())
                    });
                let cost_share_pct = if self.grand_total.is_zero() {
                    Decimal::ZERO
                } else {
                    total_cost / self.grand_total * hundred
                };
                let item_share_pct = if n.is_zero() {
                    Decimal::ZERO
                } else {
                    Decimal::from(item_count) / n * hundred
                };
                CategorySummary {
                    category,
                    item_count,
                    total_cost,
                    cost_share_pct,
                    item_share_pct,
                }
            })
            .collect()
    }

    /// Rows for the columnar export, in the requested order.
    #[must_use]
    pub fn export_rows(&self, order: SortOrder) -> Vec<ExportRow> {
        self.sorted_by_cost(order)
            .into_iter()
            .map(|c| ExportRow {
                item_id: c.item.id().to_string(),
                demand: c.item.demand(),
                unit_price: c.item.unit_price(),
                total_cost: c.item.total_cost(),
                category: c.category,
            })
            .collect()
    }
}
