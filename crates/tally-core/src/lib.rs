//! # Tally Core
//!
//! Core types and error handling for the Tally inventory and solvency
//! analytics toolkit.
//!
//! This crate provides the value objects shared by the analytic engine and
//! its front ends:
//!
//! - **Line items**: validated material records with demand, price and total cost
//! - **ABC classification**: ranked, category-annotated tables with re-sort views
//! - **Lorenz curves**: plotting coordinates plus the fixed equality line
//! - **Solvency**: balance-sheet figures, ratios, scores and verdicts
//!
//! ## Example
//!
//! ```rust
//! use tally_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let item = LineItem::new("M1", dec!(10), dec!(5)).unwrap();
//! assert_eq!(item.total_cost(), dec!(50));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ErrorKind, TallyError, TallyResult};
    pub use crate::types::{
        parse_figure, AbcCategory, AbcClassification, CategorySummary, ClassifiedLineItem,
        ExportRow, LineItem, LineItemInput, LorenzCurve, LorenzPoint, SolvencyInput,
        SolvencyInputBuilder, SolvencyRatios, SolvencyResult, SortOrder, Verdict,
    };
}

// Re-export commonly used types at crate root
pub use error::{ErrorKind, TallyError, TallyResult};
pub use types::{AbcCategory, LineItem, LorenzCurve, SolvencyInput, Verdict};
