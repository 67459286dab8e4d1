//! Input file readers.

use std::path::Path;

use serde::Deserialize;
use tally_core::prelude::*;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// One raw CSV row. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    #[serde(alias = "id")]
    item_id: Option<String>,
    demand: Option<String>,
    unit_price: Option<String>,
}

impl ItemRecord {
    fn is_blank(&self) -> bool {
        [&self.item_id, &self.demand, &self.unit_price]
            .iter()
            .all(|field| field.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

/// Reads line item drafts from a CSV file with an `item_id,demand,unit_price` header.
///
/// Fully blank rows are skipped. Every other row is validated here so
/// failures carry the file line they came from.
pub fn read_line_items(path: &Path) -> CliResult<Vec<LineItemInput>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in ["demand", "unit_price"] {
        if !headers.iter().any(|h| h == column) {
            return Err(CliError::MalformedFile {
                path: path.to_path_buf(),
                reason: format!("missing column '{column}'"),
            });
        }
    }
    if !headers.iter().any(|h| h == "item_id" || h == "id") {
        return Err(CliError::MalformedFile {
            path: path.to_path_buf(),
            reason: "missing column 'item_id'".to_string(),
        });
    }

    let mut drafts = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row = record
            .position()
            .map_or(0, |p| usize::try_from(p.line()).unwrap_or(usize::MAX));
        let raw: ItemRecord = record.deserialize(Some(&headers))?;
        if raw.is_blank() {
            continue;
        }

        let invalid = |source: TallyError| CliError::InvalidRow {
            path: path.to_path_buf(),
            row,
            source,
        };

        let demand = raw.demand.as_deref().unwrap_or_default();
        let demand = parse_figure("demand", demand).map_err(invalid)?;
        let unit_price = raw.unit_price.as_deref().unwrap_or_default();
        let unit_price = parse_figure("unit_price", unit_price).map_err(invalid)?;
        let draft = LineItemInput::new(raw.item_id.unwrap_or_default().trim(), demand, unit_price);
        draft.validate().map_err(invalid)?;
        drafts.push(draft);
    }

    debug!(path = %path.display(), rows = drafts.len(), "read line items");
    Ok(drafts)
}

/// Reads balance-sheet figures from a flat TOML table.
///
/// Values may be integers, floats or numeric strings. Figures not in the
/// file stay unset on the returned builder.
pub fn read_solvency_figures(path: &Path) -> CliResult<SolvencyInputBuilder> {
    let content = std::fs::read_to_string(path)?;
    let malformed = |reason: String| CliError::MalformedFile {
        path: path.to_path_buf(),
        reason,
    };

    let table: toml::Table = toml::from_str(&content).map_err(|e| malformed(e.to_string()))?;

    let mut builder = SolvencyInput::builder();
    for (key, value) in &table {
        let figure = match value {
            toml::Value::Integer(i) => Ok(rust_decimal::Decimal::from(*i)),
            toml::Value::Float(f) => parse_figure(key, &f.to_string()),
            toml::Value::String(s) => parse_figure(key, s),
            _ => return Err(malformed(format!("'{key}' must be a number"))),
        };
        builder = figure
            .and_then(|value| builder.set(key, value))
            .map_err(|e| malformed(e.to_string()))?;
    }

    debug!(path = %path.display(), figures = table.len(), "read solvency figures");
    Ok(builder)
}
