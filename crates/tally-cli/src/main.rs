//! Tally CLI - inventory ABC analysis, Lorenz curves and solvency scoring.
//!
//! # Usage
//!
//! ```bash
//! # Classify materials by annual cost
//! tally abc --input materials.csv --summary
//!
//! # Same table cheapest first, exported for a spreadsheet
//! tally abc --input materials.csv --sort asc --export classified.csv
//!
//! # Lorenz curve coordinates for a plotting tool
//! tally --format json lorenz --input materials.csv --curve-color red
//!
//! # Solvency score from balance-sheet figures
//! tally solvency --input balance.toml
//!
//! # Ukrainian labels by default
//! tally config set language uk
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod input;
mod locale;
mod output;

use cli::{Cli, Commands};
use commands::config::{settings_path, Settings};
use commands::Context;
use locale::Locale;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let settings_path = settings_path(cli.config)?;
    let settings = match Settings::load(&settings_path) {
        Ok(settings) => settings,
        // Config subcommands must still run so a broken file can be inspected or reset.
        Err(err) if matches!(cli.command, Commands::Config(_)) => {
            tracing::warn!(error = %err, "ignoring unreadable settings file");
            Settings::default()
        }
        Err(err) => return Err(err.into()),
    };

    let format = cli.format.unwrap_or_else(|| settings.default_format());
    if !settings.use_colors() {
        colored::control::set_override(false);
    }

    let language = cli.lang.as_deref().unwrap_or(settings.language());
    let mut locale = Locale::new(language);
    if let Some(path) = &cli.strings {
        locale = locale.with_overrides_file(path)?;
    }
    tracing::debug!(language = locale.language(), ?format, "resolved display settings");

    let ctx = Context {
        format,
        locale,
        settings,
        settings_path,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Abc(args) => commands::abc::execute(args, &ctx)?,
        Commands::Lorenz(args) => commands::lorenz::execute(args, &ctx)?,
        Commands::Solvency(args) => commands::solvency::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
