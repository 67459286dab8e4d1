//! CLI command implementations.

pub mod abc;
pub mod config;
pub mod lorenz;
pub mod solvency;

// Re-export submodules for convenience
pub use abc::AbcArgs;
pub use config::ConfigArgs;
pub use lorenz::LorenzArgs;
pub use solvency::SolvencyArgs;

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::locale::Locale;
use config::Settings;

/// Everything a command needs besides its own arguments.
#[derive(Debug)]
pub struct Context {
    /// Resolved output format.
    pub format: OutputFormat,
    /// Display strings.
    pub locale: Locale,
    /// Stored settings.
    pub settings: Settings,
    /// Settings file location.
    pub settings_path: PathBuf,
    /// Suppress headers and status lines.
    pub quiet: bool,
}

impl Context {
    /// Decimal places for printed figures.
    pub fn precision(&self) -> usize {
        self.settings.decimal_precision()
    }

    /// Looks up a display string.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.locale.get(key)
    }
}
