//! Token substitution engine for log lines.
//!
//! A format string is scanned left to right for `[token]` spans. Spans are
//! matched non-greedily, never nest and never cross a newline; an unmatched
//! `[` is plain text. Recognized tokens are replaced, everything else is
//! copied through verbatim.
//!
//! | token | replacement |
//! |-------|-------------|
//! | `date` | the timestamp formatted with the config's date pattern |
//! | `level` | the uppercased level, colored when level coloring is enabled |
//! | `log` | the message text |
//! | `red`, `green`, `blue`, `yellow`, `magenta` | the raw color escape |
//! | `reset` | the raw reset escape |

use core::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::log::config::format_date;
use crate::log::{Color, LogFormatConfig, RESET};
use crate::traits::Loggable;

/// One piece of a scanned format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied through unchanged.
    Literal(&'a str),
    /// A bracketed span; `name` excludes the brackets, `raw` includes them.
    Token { name: &'a str, raw: &'a str },
}

/// Iterator over the [`Segment`]s of a format string.
///
/// # Examples
///
/// ```
/// use chainlog::log::{Segment, Tokens};
///
/// let segments: Vec<_> = Tokens::new("[date] -> [log").collect();
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Token { name: "date", raw: "[date]" },
///         Segment::Literal(" -> [log"),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let mut search = 0;
        while let Some(found) = rest[search..].find('[') {
            let open = search + found;
            let after = &rest[open + 1..];
            match after.find([']', '\n']) {
                Some(close) if after.as_bytes()[close] == b']' => {
                    if open > 0 {
                        self.pos += open;
                        return Some(Segment::Literal(&rest[..open]));
                    }
                    let raw = &rest[..close + 2];
                    self.pos += raw.len();
                    return Some(Segment::Token { name: &after[..close], raw });
                },
                Some(_) => search = open + 1,
                None => break,
            }
        }

        self.pos = self.input.len();
        Some(Segment::Literal(rest))
    }
}

/// Wraps `text` in the color's escape followed by the reset escape.
///
/// ```
/// use chainlog::log::{colorize, Color};
///
/// assert_eq!(colorize("ok", Color::Green), "\x1b[32mok\x1b[0m");
/// ```
pub fn colorize(text: &str, color: Color) -> String {
    let escape = color.escape();
    let mut out = String::with_capacity(escape.len() + text.len() + RESET.len());
    out.push_str(escape);
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// Renders one log line.
///
/// Every recognized token in `config.format` is substituted; the reset escape
/// is appended once at the end regardless of the format. A date pattern that
/// cannot be parsed or formatted leaves the `[date]` token untouched. The date
/// is formatted at most once per call, on the first `[date]` token.
///
/// # Examples
///
/// ```
/// use chainlog::log::{render, LogFormatConfig};
/// use chrono::{TimeZone, Utc};
///
/// let config = LogFormatConfig::formatted("[date] [level]: [log]")
///     .with_date_format("%Y-%m-%d")
///     .level_color(false);
/// let now = Utc.with_ymd_and_hms(2023, 2, 2, 15, 15, 15).unwrap();
///
/// assert_eq!(render("info", "started", &config, &now), "2023-02-02 INFO: started\x1b[0m");
/// ```
pub fn render<L, Tz>(level: &str, message: &L, config: &LogFormatConfig, now: &DateTime<Tz>) -> String
where
    L: Loggable + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let text = message.message();
    let mut out = String::with_capacity(config.format.len() + text.len() + 16);
    let mut date: Option<Option<String>> = None;

    for segment in Tokens::new(&config.format) {
        match segment {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Token { name, raw } => match name {
                "date" => {
                    match date.get_or_insert_with(|| format_date(&config.date_format, now)) {
                        Some(formatted) => out.push_str(formatted),
                        None => out.push_str(raw),
                    }
                },
                "level" => push_level(&mut out, level, config),
                "log" => out.push_str(&text),
                "red" => out.push_str(Color::Red.escape()),
                "green" => out.push_str(Color::Green.escape()),
                "blue" => out.push_str(Color::Blue.escape()),
                "yellow" => out.push_str(Color::Yellow.escape()),
                "magenta" => out.push_str(Color::Magenta.escape()),
                "reset" => out.push_str(RESET),
                _ => out.push_str(raw),
            },
        }
    }

    out.push_str(RESET);
    out
}

fn push_level(out: &mut String, level: &str, config: &LogFormatConfig) {
    let upper = level.to_uppercase();
    if !config.level_color {
        out.push_str(&upper);
        return;
    }
    match config.level_colors.get(level) {
        Some(color) => out.push_str(&colorize(&upper, *color)),
        // unmapped levels get an empty color prefix but keep the reset
        None => {
            out.push_str(&upper);
            out.push_str(RESET);
        },
    }
}
