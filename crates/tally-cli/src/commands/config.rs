//! Config command implementation.
//!
//! Manages the settings file that supplies defaults for the other commands.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::Context;
use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::locale::Locale;
use crate::output::{
    print_csv, print_header, print_info, print_key_values, print_success, print_warning, KeyValue,
};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// Settings keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    /// Default output format
    DefaultFormat,
    /// Display language
    Language,
    /// Lorenz curve color
    CurveColor,
    /// Lorenz label color
    TextColor,
    /// Precision for decimal output
    DecimalPrecision,
    /// Whether to use colors
    UseColors,
}

impl SettingKey {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Some(Self::DefaultFormat),
            "language" | "lang" => Some(Self::Language),
            "curve_color" => Some(Self::CurveColor),
            "text_color" => Some(Self::TextColor),
            "decimal_precision" | "precision" => Some(Self::DecimalPrecision),
            "use_colors" | "colors" => Some(Self::UseColors),
            _ => None,
        }
    }

    fn parse(s: &str) -> CliResult<Self> {
        Self::from_str(s).ok_or_else(|| CliError::Config(format!("Unknown configuration key: {s}")))
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::Language => "language",
            Self::CurveColor => "curve_color",
            Self::TextColor => "text_color",
            Self::DecimalPrecision => "decimal_precision",
            Self::UseColors => "use_colors",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::Language => "Display language (en, uk or ua)",
            Self::CurveColor => "Lorenz curve color (name or #rrggbb)",
            Self::TextColor => "Lorenz label color (name or #rrggbb)",
            Self::DecimalPrecision => "Number of decimal places for output (0-10)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::Language => "en",
            Self::CurveColor => "blue",
            Self::TextColor => "black",
            Self::DecimalPrecision => "2",
            Self::UseColors => "true",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::Language,
            Self::CurveColor,
            Self::TextColor,
            Self::DecimalPrecision,
            Self::UseColors,
        ]
    }
}

/// Stored settings. Keys not present fall back to their defaults.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Loads settings, or defaults when the file does not exist yet.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content).map_err(|e| {
            CliError::Config(format!(
                "{}: {e}. Run `tally config reset --all` or delete the file.",
                path.display()
            ))
        })?;
        debug!(path = %path.display(), keys = settings.values.len(), "loaded settings");
        Ok(settings)
    }

    fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn value(&self, key: SettingKey) -> &str {
        self.values
            .get(key.as_str())
            .map_or(key.default_value(), String::as_str)
    }

    fn set(&mut self, key: SettingKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    fn remove(&mut self, key: SettingKey) {
        self.values.remove(key.as_str());
    }

    fn clear(&mut self) {
        self.values.clear();
    }

    /// Output format used when `--format` is not given.
    pub fn default_format(&self) -> OutputFormat {
        OutputFormat::from_str(self.value(SettingKey::DefaultFormat), true).unwrap_or_default()
    }

    /// Display language code.
    pub fn language(&self) -> &str {
        self.value(SettingKey::Language)
    }

    /// Lorenz curve color.
    pub fn curve_color(&self) -> &str {
        self.value(SettingKey::CurveColor)
    }

    /// Lorenz label color.
    pub fn text_color(&self) -> &str {
        self.value(SettingKey::TextColor)
    }

    /// Decimal places for printed figures.
    pub fn decimal_precision(&self) -> usize {
        self.value(SettingKey::DecimalPrecision).parse().unwrap_or(2)
    }

    /// Whether status lines and verdicts are colored.
    pub fn use_colors(&self) -> bool {
        parse_bool(self.value(SettingKey::UseColors)).unwrap_or(true)
    }
}

/// Resolves the settings file: an explicit path wins, else the user config directory.
pub fn settings_path(explicit: Option<PathBuf>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
    Ok(home.join("tally").join("config.json"))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Get(get_args) => execute_get(get_args, ctx),
        ConfigCommand::Set(set_args) => execute_set(set_args, ctx),
        ConfigCommand::List => execute_list(ctx),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, ctx),
        ConfigCommand::Path => execute_path(ctx),
    }
}

/// Show current configuration.
fn execute_show(ctx: &Context) -> Result<()> {
    let results: Vec<KeyValue> = SettingKey::all()
        .iter()
        .map(|key| KeyValue::new(key.as_str(), ctx.settings.value(*key)))
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(ctx.text("config.show.title"));
            }
            print_key_values(&results, ctx.text("config.col.key"), ctx.text("config.col.value"));
        }
        OutputFormat::Json => {
            let output: BTreeMap<&str, &str> = SettingKey::all()
                .iter()
                .map(|key| (key.as_str(), ctx.settings.value(*key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            print_csv(&results)?;
        }
        OutputFormat::Minimal => {
            for kv in &results {
                println!("{}={}", kv.key, kv.value);
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, ctx: &Context) -> Result<()> {
    let key = SettingKey::parse(&args.key)?;
    let value = ctx.settings.value(key);

    match ctx.format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, ctx: &Context) -> Result<()> {
    let key = SettingKey::parse(&args.key)?;
    let value = validate_setting(key, &args.value)?;

    let mut settings = ctx.settings.clone();
    settings.set(key, value.clone());
    settings.save(&ctx.settings_path)?;

    if !ctx.quiet {
        print_success(&format!("Set {} = {}", key.as_str(), value));
    }
    Ok(())
}

/// List available configuration keys.
fn execute_list(ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Table => {
            let results: Vec<KeyValue> = SettingKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.default_value()),
                    )
                })
                .collect();
            if !ctx.quiet {
                print_header(ctx.text("config.list.title"));
            }
            print_key_values(
                &results,
                ctx.text("config.col.key"),
                ctx.text("config.col.description"),
            );
        }
        OutputFormat::Json => {
            let output: Vec<_> = SettingKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(["key", "description", "default"])?;
            for key in SettingKey::all() {
                wtr.write_record([key.as_str(), key.description(), key.default_value()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for key in SettingKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs, ctx: &Context) -> Result<()> {
    let mut settings = ctx.settings.clone();

    if args.all {
        settings.clear();
        settings.save(&ctx.settings_path)?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = SettingKey::parse(&key_str)?;
        settings.remove(key);
        settings.save(&ctx.settings_path)?;
        print_success(&format!("Reset {} to default ({})", key.as_str(), key.default_value()));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(ctx: &Context) -> Result<()> {
    let path = &ctx.settings_path;
    if ctx.format == OutputFormat::Minimal {
        println!("{}", path.display());
        return Ok(());
    }
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Accepts a plain color name or a `#rgb`/`#rrggbb` hex code.
pub fn is_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

/// Validates a setting and returns the normalized value to store.
fn validate_setting(key: SettingKey, value: &str) -> CliResult<String> {
    let value = value.trim();
    let invalid =
        |hint: &str| CliError::Config(format!("Invalid {}: {value}. {hint}", key.as_str()));

    match key {
        SettingKey::DefaultFormat => OutputFormat::from_str(value, true)
            .map(|_| value.to_lowercase())
            .map_err(|_| invalid("Use table, json, csv, or minimal.")),
        SettingKey::Language => Locale::resolve(value)
            .map(str::to_string)
            .ok_or_else(|| invalid("Use en or uk (ua).")),
        SettingKey::CurveColor | SettingKey::TextColor => {
            if is_color(value) {
                Ok(value.to_lowercase())
            } else {
                Err(invalid("Use a color name or #rrggbb."))
            }
        }
        SettingKey::DecimalPrecision => match value.parse::<usize>() {
            Ok(precision) if precision <= 10 => Ok(precision.to_string()),
            _ => Err(invalid("Must be a number between 0 and 10.")),
        },
        SettingKey::UseColors => parse_bool(value)
            .map(|b| b.to_string())
            .ok_or_else(|| invalid("Use true or false.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_aliases() {
        assert_eq!(SettingKey::from_str("precision"), Some(SettingKey::DecimalPrecision));
        assert_eq!(SettingKey::from_str("LANG"), Some(SettingKey::Language));
        assert_eq!(SettingKey::from_str("currency"), None);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_format(), OutputFormat::Table);
        assert_eq!(settings.language(), "en");
        assert_eq!(settings.curve_color(), "blue");
        assert_eq!(settings.text_color(), "black");
        assert_eq!(settings.decimal_precision(), 2);
        assert!(settings.use_colors());
    }

    #[test]
    fn test_validate_setting() {
        assert_eq!(validate_setting(SettingKey::DefaultFormat, "JSON").unwrap(), "json");
        assert_eq!(validate_setting(SettingKey::Language, "UK").unwrap(), "uk");
        assert_eq!(validate_setting(SettingKey::Language, "ua").unwrap(), "uk");
        assert_eq!(validate_setting(SettingKey::CurveColor, "#1F77B4").unwrap(), "#1f77b4");
        assert_eq!(validate_setting(SettingKey::UseColors, "no").unwrap(), "false");
        assert_eq!(validate_setting(SettingKey::DecimalPrecision, "0").unwrap(), "0");

        assert!(validate_setting(SettingKey::DefaultFormat, "xml").is_err());
        assert!(validate_setting(SettingKey::Language, "fr").is_err());
        assert!(validate_setting(SettingKey::TextColor, "#12345").is_err());
        assert!(validate_setting(SettingKey::DecimalPrecision, "11").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut settings = Settings::load(&path).unwrap();
        settings.set(SettingKey::DecimalPrecision, "4".to_string());
        settings.set(SettingKey::Language, "uk".to_string());
        settings.save(&path).unwrap();

        let reloaded = Settings::load(&path).unwrap();
        assert_eq!(reloaded.decimal_precision(), 4);
        assert_eq!(reloaded.language(), "uk");
    }

    #[test]
    fn test_corrupt_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("config reset --all"));
    }
}
