//! Lorenz command implementation.
//!
//! Prints the cost concentration curve. JSON output carries everything an
//! external plotter needs: points, equality line, labels and colors.

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use tally_analytics::{aggregate, build_lorenz_curve};
use tally_core::prelude::*;

use super::config::is_color;
use super::Context;
use crate::cli::OutputFormat;
use crate::input::read_line_items;
use crate::output::{
    print_csv, print_grid, print_header, print_json_value, print_key_values, KeyValue,
};

/// Arguments for the lorenz command.
#[derive(Args, Debug)]
pub struct LorenzArgs {
    /// CSV file with `item_id,demand,unit_price` columns
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Curve color (defaults to the `curve_color` setting)
    #[arg(long, value_name = "COLOR")]
    pub curve_color: Option<String>,

    /// Label color (defaults to the `text_color` setting)
    #[arg(long, value_name = "COLOR")]
    pub text_color: Option<String>,
}

#[derive(Debug, Serialize)]
struct LorenzStyle<'a> {
    curve_color: &'a str,
    text_color: &'a str,
}

#[derive(Serialize)]
struct LorenzReport<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    curve_label: &'a str,
    equality_label: &'a str,
    style: LorenzStyle<'a>,
    points: &'a [LorenzPoint],
    equality_line: [LorenzPoint; 2],
}

/// Execute the lorenz command.
pub fn execute(args: LorenzArgs, ctx: &Context) -> Result<()> {
    let style = LorenzStyle {
        curve_color: args.curve_color.as_deref().unwrap_or(ctx.settings.curve_color()),
        text_color: args.text_color.as_deref().unwrap_or(ctx.settings.text_color()),
    };
    for color in [style.curve_color, style.text_color] {
        if !is_color(color) {
            bail!("Invalid color: {color}. Use a color name or #rrggbb.");
        }
    }

    let drafts = read_line_items(&args.input)?;
    let items = aggregate(&drafts)?;
    let curve = build_lorenz_curve(&items)?;

    match ctx.format {
        OutputFormat::Table => print_curve(&curve, &style, ctx),
        OutputFormat::Json => {
            let report = LorenzReport {
                title: ctx.text("lorenz.title"),
                x_label: ctx.text("lorenz.x_label"),
                y_label: ctx.text("lorenz.y_label"),
                curve_label: ctx.text("lorenz.curve"),
                equality_label: ctx.text("lorenz.equality"),
                style,
                points: curve.points(),
                equality_line: curve.equality_line(),
            };
            print_json_value(&report)?;
        }
        OutputFormat::Csv => print_csv(curve.points())?,
        OutputFormat::Minimal => {
            for point in curve.points() {
                println!("{} {}", point.x, point.y);
            }
        }
    }

    Ok(())
}

fn print_curve(curve: &LorenzCurve, style: &LorenzStyle<'_>, ctx: &Context) {
    let precision = ctx.precision().max(4);
    let headers = vec![
        ctx.text("abc.col.rank").to_string(),
        ctx.text("lorenz.x_label").to_string(),
        ctx.text("lorenz.y_label").to_string(),
    ];

    let rows = curve
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            vec![
                (i + 1).to_string(),
                format!("{:.prec$}", p.x, prec = precision),
                format!("{:.prec$}", p.y, prec = precision),
            ]
        })
        .collect();

    if !ctx.quiet {
        print_header(ctx.text("lorenz.title"));
    }
    print_grid(headers, rows);

    if ctx.quiet {
        return;
    }
    let [start, end] = curve.equality_line();
    println!(
        "{}: ({}, {}) - ({}, {})",
        ctx.text("lorenz.equality"),
        start.x,
        start.y,
        end.x,
        end.y
    );
    print_key_values(
        &[
            KeyValue::new(ctx.text("lorenz.style.curve_color"), style.curve_color),
            KeyValue::new(ctx.text("lorenz.style.text_color"), style.text_color),
        ],
        ctx.text("kv.metric"),
        ctx.text("kv.value"),
    );
}
