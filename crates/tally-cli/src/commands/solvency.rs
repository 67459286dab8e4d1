//! Solvency command implementation.
//!
//! Scores a firm from eight balance-sheet figures.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use tally_analytics::score_solvency;
use tally_core::prelude::*;

use super::Context;
use crate::cli::OutputFormat;
use crate::input::read_solvency_figures;
use crate::output::{
    format_decimal, print_csv, print_header, print_json_value, print_key_values, KeyValue,
};

/// Arguments for the solvency command.
///
/// Figures given as flags take precedence over the same figures in `--input`.
#[derive(Args, Debug)]
pub struct SolvencyArgs {
    /// TOML file with the balance-sheet figures
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Current (working) assets
    #[arg(long, allow_hyphen_values = true)]
    pub current_assets: Option<String>,

    /// Short-term liabilities
    #[arg(long, allow_hyphen_values = true)]
    pub current_liabilities: Option<String>,

    /// Total debt of the firm
    #[arg(long, allow_hyphen_values = true)]
    pub total_debt: Option<String>,

    /// Total assets
    #[arg(long, allow_hyphen_values = true)]
    pub total_assets: Option<String>,

    /// Net (book) profit
    #[arg(long, allow_hyphen_values = true)]
    pub net_profit: Option<String>,

    /// Total sales volume
    #[arg(long, allow_hyphen_values = true)]
    pub total_sales: Option<String>,

    /// Retained earnings
    #[arg(long, allow_hyphen_values = true)]
    pub retained_earnings: Option<String>,

    /// Firm capital
    #[arg(long, allow_hyphen_values = true)]
    pub firm_capital: Option<String>,
}

impl SolvencyArgs {
    fn figures(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("current_assets", self.current_assets.as_deref()),
            ("current_liabilities", self.current_liabilities.as_deref()),
            ("total_debt", self.total_debt.as_deref()),
            ("total_assets", self.total_assets.as_deref()),
            ("net_profit", self.net_profit.as_deref()),
            ("total_sales", self.total_sales.as_deref()),
            ("retained_earnings", self.retained_earnings.as_deref()),
            ("firm_capital", self.firm_capital.as_deref()),
        ]
    }

    /// Merges the input file (if any) with the flags.
    fn to_input(&self) -> Result<SolvencyInput> {
        let mut builder = match &self.input {
            Some(path) => read_solvency_figures(path)?,
            None => SolvencyInput::builder(),
        };
        for (field, text) in self.figures() {
            if let Some(text) = text {
                builder = builder.set(field, parse_figure(field, text)?)?;
            }
        }
        Ok(builder.build()?)
    }
}

#[derive(Serialize)]
struct SolvencyReport<'a> {
    #[serde(flatten)]
    result: SolvencyResult,
    verdict_label: &'a str,
}

/// Execute the solvency command.
pub fn execute(args: SolvencyArgs, ctx: &Context) -> Result<()> {
    let input = args.to_input()?;
    let result = score_solvency(&input)?;
    let verdict_label = ctx.text(result.verdict.key());

    match ctx.format {
        OutputFormat::Table => {
            let precision = ctx.precision();
            let ratios = &result.ratios;
            let rows = vec![
                KeyValue::from_decimal(
                    ctx.text("solvency.current_ratio"),
                    ratios.current_ratio,
                    precision,
                ),
                KeyValue::from_decimal(
                    ctx.text("solvency.debt_ratio"),
                    ratios.debt_ratio,
                    precision,
                ),
                KeyValue::from_decimal(
                    ctx.text("solvency.profitability_ratio"),
                    ratios.profitability_ratio,
                    precision,
                ),
                KeyValue::from_decimal(
                    ctx.text("solvency.accumulated_capital_ratio"),
                    ratios.accumulated_capital_ratio,
                    precision,
                ),
                KeyValue::from_decimal(ctx.text("solvency.score"), result.score, precision.max(3)),
            ];

            if !ctx.quiet {
                print_header(ctx.text("solvency.title"));
            }
            print_key_values(&rows, ctx.text("kv.metric"), ctx.text("kv.value"));

            let painted = match result.verdict {
                Verdict::Stable => verdict_label.green(),
                Verdict::AtRisk => verdict_label.yellow(),
                Verdict::Bankrupt => verdict_label.red(),
            };
            println!("{}: {}", ctx.text("solvency.verdict"), painted.bold());
        }
        OutputFormat::Json => {
            print_json_value(&SolvencyReport {
                result,
                verdict_label,
            })?;
        }
        OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("current_ratio", result.ratios.current_ratio.to_string()),
                KeyValue::new("debt_ratio", result.ratios.debt_ratio.to_string()),
                KeyValue::new(
                    "profitability_ratio",
                    result.ratios.profitability_ratio.to_string(),
                ),
                KeyValue::new(
                    "accumulated_capital_ratio",
                    result.ratios.accumulated_capital_ratio.to_string(),
                ),
                KeyValue::new("score", result.score.to_string()),
                KeyValue::new("verdict", result.verdict.as_str()),
            ];
            print_csv(&rows)?;
        }
        OutputFormat::Minimal => {
            println!(
                "{} {}",
                format_decimal(result.score, 3),
                result.verdict.as_str()
            );
        }
    }

    Ok(())
}
