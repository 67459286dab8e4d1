//! ABC command implementation.
//!
//! Classifies line items read from CSV into A/B/C categories.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use tally_analytics::{aggregate, classify};
use tally_core::prelude::*;

use super::Context;
use crate::cli::{OutputFormat, SortArg};
use crate::input::read_line_items;
use crate::output::{
    format_decimal, format_percent, print_csv, print_grid, print_header, print_json_value,
    print_success,
};

/// Arguments for the abc command.
#[derive(Args, Debug)]
pub struct AbcArgs {
    /// CSV file with `item_id,demand,unit_price` columns
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Display order by total cost
    #[arg(short, long, value_enum, default_value_t = SortArg::Desc)]
    pub sort: SortArg,

    /// Show per-category totals
    #[arg(long)]
    pub summary: bool,

    /// Also write the classification to this CSV file
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct AbcReport<'a> {
    #[serde(with = "rust_decimal::serde::str")]
    grand_total: Decimal,
    items: Vec<&'a ClassifiedLineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Vec<CategorySummary>>,
}

/// Execute the abc command.
pub fn execute(args: AbcArgs, ctx: &Context) -> Result<()> {
    let drafts = read_line_items(&args.input)?;
    let items = aggregate(&drafts)?;
    let table = classify(&items)?;
    let order = SortOrder::from(args.sort);

    if let Some(path) = &args.export {
        let mut wtr = csv::Writer::from_path(path)?;
        for row in table.export_rows(order) {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        info!(path = %path.display(), rows = table.len(), "exported classification");
    }

    match ctx.format {
        OutputFormat::Table => {
            print_items(&table, order, ctx);
            if args.summary {
                print_summary(&table, ctx);
            }
            if let Some(path) = &args.export {
                if !ctx.quiet {
                    print_success(&format!("{} {}", ctx.text("export.saved"), path.display()));
                }
            }
        }
        OutputFormat::Json => {
            let report = AbcReport {
                grand_total: table.grand_total(),
                items: table.sorted_by_cost(order),
                summary: args.summary.then(|| table.summary()),
            };
            print_json_value(&report)?;
        }
        OutputFormat::Csv => {
            print_csv(&table.export_rows(order))?;
        }
        OutputFormat::Minimal => {
            let counts: Vec<String> = AbcCategory::ALL
                .iter()
                .map(|category| format!("{}:{}", category, table.count(*category)))
                .collect();
            println!("{}", counts.join(" "));
        }
    }

    Ok(())
}

fn print_items(table: &AbcClassification, order: SortOrder, ctx: &Context) {
    let precision = ctx.precision();
    let headers = [
        "abc.col.rank",
        "abc.col.item_id",
        "abc.col.demand",
        "abc.col.unit_price",
        "abc.col.total_cost",
        "abc.col.cumulative_cost",
        "abc.col.cumulative_pct",
        "abc.col.category",
    ]
    .iter()
    .map(|key| ctx.text(key).to_string())
    .collect();

    let rows = table
        .sorted_by_cost(order)
        .into_iter()
        .map(|c| {
            vec![
                c.rank.to_string(),
                c.item.id().to_string(),
                c.item.demand().normalize().to_string(),
                format_decimal(c.item.unit_price(), precision),
                format_decimal(c.item.total_cost(), precision),
                format_decimal(c.cumulative_cost, precision),
                format_percent(c.cumulative_pct, precision),
                c.category.to_string(),
            ]
        })
        .collect();

    if !ctx.quiet {
        print_header(ctx.text("abc.title"));
    }
    print_grid(headers, rows);
    if !ctx.quiet {
        println!(
            "{}: {}",
            ctx.text("abc.grand_total"),
            format_decimal(table.grand_total(), precision)
        );
    }
}

fn print_summary(table: &AbcClassification, ctx: &Context) {
    let precision = ctx.precision();
    let headers = [
        "abc.col.category",
        "abc.summary.items",
        "abc.summary.item_share",
        "abc.summary.cost",
        "abc.summary.cost_share",
    ]
    .iter()
    .map(|key| ctx.text(key).to_string())
    .collect();

    let rows = table
        .summary()
        .into_iter()
        .map(|s| {
            vec![
                s.category.to_string(),
                s.item_count.to_string(),
                format_percent(s.item_share_pct, precision),
                format_decimal(s.total_cost, precision),
                format_percent(s.cost_share_pct, precision),
            ]
        })
        .collect();

    if !ctx.quiet {
        print_header(ctx.text("abc.summary.title"));
    }
    print_grid(headers, rows);
}
