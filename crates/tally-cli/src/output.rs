//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
};

/// Prints a single value as pretty JSON.
pub fn print_json_value<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints rows under runtime (localized) headers.
///
/// Every column except the first is right-aligned.
pub fn print_grid(headers: Vec<String>, rows: Vec<Vec<String>>) {
    let mut builder = Builder::default();
    builder.push_record(headers);
    for row in rows {
        builder.push_record(row);
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Prints data as CSV.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats a decimal to a fixed number of places, rounding half away from zero.
///
/// `Decimal`'s own precision formatting truncates, so round first.
pub fn format_decimal(value: Decimal, precision: usize) -> String {
    let dp = u32::try_from(precision).unwrap_or(u32::MAX);
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.prec$}", rounded, prec = precision)
}

/// Formats a percentage value (already scaled to 0-100).
pub fn format_percent(value: Decimal, precision: usize) -> String {
    format!("{}%", format_decimal(value, precision))
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a decimal value.
    pub fn from_decimal(key: impl Into<String>, value: Decimal, precision: usize) -> Self {
        Self {
            key: key.into(),
            value: format_decimal(value, precision),
        }
    }
}

/// Prints key-value pairs under localized column headers.
pub fn print_key_values(pairs: &[KeyValue], key_header: &str, value_header: &str) {
    let rows = pairs
        .iter()
        .map(|kv| vec![kv.key.clone(), kv.value.clone()])
        .collect();
    print_grid(vec![key_header.to_string(), value_header.to_string()], rows);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
