//! Domain types for inventory and solvency analytics.

mod classification;
mod line_item;
mod lorenz;
mod solvency;

pub use classification::{
    AbcCategory, AbcClassification, CategorySummary, ClassifiedLineItem, ExportRow, SortOrder,
};
pub use line_item::{parse_figure, LineItem, LineItemInput};
pub use lorenz::{LorenzCurve, LorenzPoint};
pub use solvency::{SolvencyInput, SolvencyInputBuilder, SolvencyRatios, SolvencyResult, Verdict};
