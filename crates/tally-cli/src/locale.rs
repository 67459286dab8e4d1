//! Display strings.
//!
//! Every user-facing label goes through a [`Locale`]. Two tables ship with
//! the binary (`en`, `uk`); a TOML file can override individual keys:
//!
//! ```toml
//! [abc]
//! title = "Materials by cost"
//!
//! [verdict]
//! at_risk = "Watch closely"
//! ```

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{CliError, CliResult};

/// Fallback language.
pub const DEFAULT_LANGUAGE: &str = "en";

const EN: &[(&str, &str)] = &[
    ("abc.title", "ABC Classification"),
    ("abc.col.rank", "#"),
    ("abc.col.item_id", "Item"),
    ("abc.col.demand", "Annual demand"),
    ("abc.col.unit_price", "Unit price"),
    ("abc.col.total_cost", "Total cost"),
    ("abc.col.cumulative_cost", "Cumulative cost"),
    ("abc.col.cumulative_pct", "Cumulative %"),
    ("abc.col.category", "Category"),
    ("abc.grand_total", "Grand total"),
    ("abc.summary.title", "Category Summary"),
    ("abc.summary.items", "Items"),
    ("abc.summary.item_share", "Share of items"),
    ("abc.summary.cost", "Cost"),
    ("abc.summary.cost_share", "Share of cost"),
    ("lorenz.title", "Lorenz Curve"),
    ("lorenz.x_label", "Cumulative Share of Items"),
    ("lorenz.y_label", "Cumulative Share of Costs"),
    ("lorenz.curve", "Lorenz Curve"),
    ("lorenz.equality", "Equality Line"),
    ("lorenz.style.curve_color", "Curve color"),
    ("lorenz.style.text_color", "Text color"),
    ("solvency.title", "Solvency Assessment"),
    ("solvency.current_ratio", "Current ratio"),
    ("solvency.debt_ratio", "Debt ratio"),
    ("solvency.profitability_ratio", "Profitability ratio"),
    ("solvency.accumulated_capital_ratio", "Accumulated capital ratio"),
    ("solvency.score", "Z-score"),
    ("solvency.verdict", "Verdict"),
    ("verdict.stable", "Stable"),
    ("verdict.at_risk", "At risk"),
    ("verdict.bankrupt", "Bankrupt"),
    ("export.saved", "Classification exported to"),
    ("kv.metric", "Metric"),
    ("kv.value", "Value"),
    ("config.show.title", "Current Configuration"),
    ("config.list.title", "Available Configuration Keys"),
    ("config.col.key", "Setting"),
    ("config.col.value", "Value"),
    ("config.col.description", "Description"),
];

const UK: &[(&str, &str)] = &[
    ("abc.title", "ABC-аналіз"),
    ("abc.col.rank", "№"),
    ("abc.col.item_id", "№ матеріалу"),
    ("abc.col.demand", "Річна потреба"),
    ("abc.col.unit_price", "Ціна за одиницю, у.о."),
    ("abc.col.total_cost", "Загальна вартість матеріалу"),
    ("abc.col.cumulative_cost", "Накопичена вартість"),
    ("abc.col.cumulative_pct", "Накопичений %"),
    ("abc.col.category", "Категорія"),
    ("abc.grand_total", "Загальна вартість"),
    ("abc.summary.title", "Підсумок за категоріями"),
    ("abc.summary.items", "Кількість"),
    ("abc.summary.item_share", "Частка позицій"),
    ("abc.summary.cost", "Вартість"),
    ("abc.summary.cost_share", "Частка вартості"),
    ("lorenz.title", "Крива Лоренца"),
    ("lorenz.x_label", "Накопичена частка матеріалів"),
    ("lorenz.y_label", "Накопичена частка витрат"),
    ("lorenz.curve", "Крива Лоренца"),
    ("lorenz.equality", "Лінія рівності"),
    ("lorenz.style.curve_color", "Колір кривої"),
    ("lorenz.style.text_color", "Колір тексту"),
    ("solvency.title", "Оцінка платоспроможності"),
    ("solvency.current_ratio", "Коефіцієнт поточної ліквідності"),
    ("solvency.debt_ratio", "Коефіцієнт заборгованості"),
    ("solvency.profitability_ratio", "Рентабельність продажів"),
    ("solvency.accumulated_capital_ratio", "Частка накопиченого капіталу"),
    ("solvency.score", "Z-показник"),
    ("solvency.verdict", "Висновок"),
    ("verdict.stable", "Стабільний"),
    ("verdict.at_risk", "Під загрозою"),
    ("verdict.bankrupt", "Банкрут"),
    ("export.saved", "Класифікацію збережено у"),
    ("kv.metric", "Показник"),
    ("kv.value", "Значення"),
    ("config.show.title", "Поточні налаштування"),
    ("config.list.title", "Доступні параметри"),
    ("config.col.key", "Параметр"),
    ("config.col.value", "Значення"),
    ("config.col.description", "Опис"),
];

/// Resolved display strings for one run.
#[derive(Debug, Clone)]
pub struct Locale {
    language: &'static str,
    overrides: HashMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl Locale {
    /// Maps a language code or alias (`ua` for `uk`) to a built-in table.
    pub fn resolve(code: &str) -> Option<&'static str> {
        match code.trim().to_lowercase().as_str() {
            "uk" | "ua" => Some("uk"),
            "en" => Some("en"),
            _ => None,
        }
    }

    /// Selects a built-in table, falling back to English for unknown codes.
    pub fn new(language: &str) -> Self {
        let language = Self::resolve(language).unwrap_or_else(|| {
            warn!(language, "unknown display language, using English");
            DEFAULT_LANGUAGE
        });
        Self {
            language,
            overrides: HashMap::new(),
        }
    }

    /// The language actually in use.
    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Layers dotted-key overrides from a TOML file on top of the table.
    pub fn with_overrides_file(mut self, path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let table: toml::Table = toml::from_str(&content).map_err(|e| CliError::MalformedFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut flat = HashMap::new();
        flatten(&table, "", &mut flat).map_err(|key| CliError::MalformedFile {
            path: path.to_path_buf(),
            reason: format!("'{key}' must be a string"),
        })?;

        debug!(path = %path.display(), keys = flat.len(), "loaded display string overrides");
        self.overrides.extend(flat);
        Ok(self)
    }

    /// Looks a key up: overrides, then the selected table, then English.
    ///
    /// A key nobody defines is returned as-is.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(value) = self.overrides.get(key) {
            return value;
        }
        lookup(self.table(), key)
            .or_else(|| lookup(EN, key))
            .unwrap_or(key)
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self.language {
            "uk" => UK,
            _ => EN,
        }
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn flatten(
    table: &toml::Table,
    prefix: &str,
    out: &mut HashMap<String, String>,
) -> Result<(), String> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(s) => {
                out.insert(key, s.clone());
            }
            toml::Value::Table(nested) => flatten(nested, &key, out)?,
            _ => return Err(key),
        }
    }
    Ok(())
}
