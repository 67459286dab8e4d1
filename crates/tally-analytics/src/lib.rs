//! # Tally Analytics
//!
//! The analytic engine behind Tally:
//! - **Aggregation**: validate line items and compute total cost
//! - **ABC**: rank items by cost and assign A/B/C by cumulative share
//! - **Lorenz**: cumulative share-of-items vs share-of-cost coordinates
//! - **Solvency**: Altman-style weighted Z-score with a three-tier verdict
//!
//! Every function is pure: inputs are borrowed, results are owned values,
//! and nothing is retained between calls.
//!
//! ## Usage
//!
//! ```rust
//! use tally_analytics::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let items = aggregate(&[
//!     LineItemInput::new("M1", dec!(10), dec!(5)),
//!     LineItemInput::new("M2", dec!(2), dec!(50)),
//!     LineItemInput::new("M3", dec!(1), dec!(1)),
//! ])
//! .unwrap();
//!
//! let table = classify(&items).unwrap();
//! assert_eq!(table.items()[0].item.id(), "M2");
//!
//! let curve = build_lorenz_curve(&items).unwrap();
//! assert_eq!(curve.last(), Some(LorenzPoint::new(1.0, 1.0)));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod abc;
pub mod aggregate;
pub mod lorenz;
pub mod solvency;

pub use abc::{category_for, classify, A_UPPER_PCT, BAND_EPSILON, B_UPPER_PCT};
pub use aggregate::{aggregate, grand_total};
pub use lorenz::build_lorenz_curve;
pub use solvency::{score_solvency, solvency_ratios, verdict_for, AT_RISK_FLOOR, STABLE_FLOOR};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::abc::classify;
    pub use crate::aggregate::aggregate;
    pub use crate::lorenz::build_lorenz_curve;
    pub use crate::solvency::score_solvency;

    pub use tally_core::prelude::*;
}
