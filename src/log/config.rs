//! Log format configuration and its presets.
//!
//! A [`LogFormatConfig`] is immutable once handed to a logger. Date patterns
//! use chrono's `strftime` syntax; the format string is scanned for bracketed
//! tokens (see [`render`](crate::log::render)).

use std::collections::BTreeMap;
use std::fmt::{self, Display, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::log::Color;
use crate::types::ErrorChain;

/// Date pattern used by the presets.
pub const DEFAULT_DATE_FORMAT: &str = "[%Y-%m-%d %H:%M:%S]";

/// Token format used by [`LogFormatConfig::simple`].
pub const SIMPLE_FORMAT: &str = "[green][date][reset] [yellow]->[reset] [level]: [log]";

/// Problems detected while building or loading a [`LogFormatConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The date pattern contains an invalid `strftime` specifier.
    InvalidDateFormat(String),
    /// A color name is not part of the color table.
    UnknownColor(String),
    /// The configuration document could not be decoded.
    Json(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDateFormat(pattern) => {
                write!(f, "invalid date format: {:?}", pattern)
            },
            ConfigError::UnknownColor(name) => write!(f, "unknown color: {:?}", name),
            ConfigError::Json(e) => write!(f, "malformed log config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

/// Rendering configuration for a console logger.
///
/// # Examples
///
/// ```
/// use chainlog::log::{Color, LogFormatConfig};
///
/// let config = LogFormatConfig::formatted("[date] [level]: [log]")
///     .with_date_format("%H:%M")
///     .with_level_color("info", Color::Green);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.level_colors.get("info"), Some(&Color::Green));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogFormatConfig {
    /// `strftime` pattern used for the `[date]` token.
    pub date_format: String,
    /// Template containing bracketed tokens.
    pub format: String,
    /// Whether the `[level]` token is wrapped in its level color.
    pub level_color: bool,
    /// Level name to color mapping.
    pub level_colors: BTreeMap<String, Color>,
}

impl Default for LogFormatConfig {
    fn default() -> Self {
        Self::simple()
    }
}

impl LogFormatConfig {
    /// Builds a config from explicit parts with level coloring enabled.
    pub fn new(
        date_format: impl Into<String>,
        format: impl Into<String>,
        level_colors: BTreeMap<String, Color>,
    ) -> Self {
        Self {
            date_format: date_format.into(),
            format: format.into(),
            level_color: true,
            level_colors,
        }
    }

    /// Colored `date -> LEVEL: message` layout.
    #[inline]
    pub fn simple() -> Self {
        Self::formatted(SIMPLE_FORMAT)
    }

    /// Custom token format with the default date pattern and level colors.
    #[inline]
    pub fn formatted(format: impl Into<String>) -> Self {
        Self::new(DEFAULT_DATE_FORMAT, format, default_level_colors())
    }

    /// Decodes a config from JSON and validates it.
    ///
    /// Missing fields fall back to the [`simple`](Self::simple) preset.
    pub fn from_json(json: &str) -> Result<Self, ErrorChain<ConfigError>> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            ErrorChain::new(ConfigError::Json(e)).caused("could not decode log format config")
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Maps a level name to a color, replacing any previous mapping.
    pub fn with_level_color(mut self, level: impl Into<String>, color: Color) -> Self {
        self.level_colors.insert(level.into(), color);
        self
    }

    pub fn level_color(mut self, enabled: bool) -> Self {
        self.level_color = enabled;
        self
    }

    /// Checks that the date pattern only uses known `strftime` specifiers and
    /// that it can actually render a timestamp.
    pub fn validate(&self) -> Result<(), ErrorChain<ConfigError>> {
        let trial = Utc
            .timestamp_opt(0, 0)
            .single()
            .and_then(|epoch| format_date(&self.date_format, &epoch.fixed_offset()));
        if trial.is_none() {
            return Err(ErrorChain::new(ConfigError::InvalidDateFormat(self.date_format.clone()))
                .caused_at("log format config rejected", "LogFormatConfig::validate"));
        }
        Ok(())
    }
}

/// `error → red`, `info → blue`, `debug → yellow`.
pub fn default_level_colors() -> BTreeMap<String, Color> {
    BTreeMap::from([
        ("error".to_owned(), Color::Red),
        ("info".to_owned(), Color::Blue),
        ("debug".to_owned(), Color::Yellow),
    ])
}

/// Formats `now` with a date pattern.
///
/// Returns `None` if any specifier is invalid or if the parsed pattern fails
/// while formatting (chrono accepts some specifiers, such as `%#z`, that are
/// parse-only).
pub(crate) fn format_date<Tz>(pattern: &str, now: &DateTime<Tz>) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut date = String::new();
    write!(date, "{}", now.format_with_items(items.into_iter())).ok()?;
    Some(date)
}
