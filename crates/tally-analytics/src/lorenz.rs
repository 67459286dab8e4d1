//! Lorenz curve construction.
//!
//! Items are ranked by total cost, cheapest first. For the item at index
//! `i` of `n`:
//!
//! ```text
//! x_i = (i + 1) / n
//! y_i = cumulative_cost_i / grand_total
//! ```
//!
//! The further the curve sags below the equality line, the more the cost is
//! concentrated in a few items.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tally_core::types::{LorenzCurve, LorenzPoint};
use tally_core::{LineItem, TallyError, TallyResult};
use tracing::debug;

use crate::aggregate::grand_total;

/// Builds the empirical Lorenz curve of item costs.
///
/// Returns one point per item in ascending-cost order; the last point is
/// always `(1.0, 1.0)`. Fails with `DegenerateInput` if `items` is empty or
/// the grand total cost is zero.
pub fn build_lorenz_curve(items: &[LineItem]) -> TallyResult<LorenzCurve> {
    let total = grand_total(items)?;
    let n = items.len();

    let mut ranked: Vec<&LineItem> = items.iter().collect();
    ranked.sort_by(|a, b| a.total_cost().cmp(&b.total_cost()));

    let mut cumulative = Decimal::ZERO;
    let mut points = Vec::with_capacity(n);
    for (index, item) in ranked.into_iter().enumerate() {
        cumulative += item.total_cost();
        let share = (cumulative / total)
            .to_f64()
            .ok_or_else(|| TallyError::invalid_input("total_cost", "cost share out of range"))?;
        let x = (index + 1) as f64 / n as f64;
        points.push(LorenzPoint::new(x, share));
    }

    debug!(points = points.len(), grand_total = %total, "built lorenz curve");
    Ok(LorenzCurve::new(points))
}
