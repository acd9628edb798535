//! Severity-specific loggers built on [`render`].

use core::fmt::{self, Display};
use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Local};

use crate::log::{render, Color, ConfigError, LogFormatConfig};
use crate::traits::Loggable;
use crate::types::ErrorChain;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Error,
    Info,
    Debug,
}

impl Level {
    /// Lowercase name, used as the key into `level_colors`.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that accepts messages at the three severities.
pub trait Logger {
    fn log(&self, level: Level, message: &dyn Loggable);

    #[inline]
    fn error(&self, message: &dyn Loggable) {
        self.log(Level::Error, message);
    }

    #[inline]
    fn info(&self, message: &dyn Loggable) {
        self.log(Level::Info, message);
    }

    #[inline]
    fn debug(&self, message: &dyn Loggable) {
        self.log(Level::Debug, message);
    }

    /// Returns a sink that logs at `Error`, ready for
    /// [`ErrorChain::log_if_err`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlog::log::{ConsoleLogger, Logger};
    /// use chainlog::ErrorChain;
    ///
    /// let logger = ConsoleLogger::simple(|line| eprintln!("{line}"));
    /// let err = ErrorChain::new("boom").caused("request failed").log_if_err(logger.sink());
    /// assert!(err.is_err());
    /// ```
    fn sink(&self) -> impl FnOnce(&dyn Loggable) + '_
    where
        Self: Sized,
    {
        move |message: &dyn Loggable| self.error(message)
    }
}

/// Output destination for rendered lines.
pub type Sink = Box<dyn Fn(&str)>;

/// Timestamp source.
pub type Clock = Box<dyn Fn() -> DateTime<FixedOffset>>;

fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Logger that renders lines with a [`LogFormatConfig`] and hands them to a sink.
///
/// The configuration is fixed at construction. The clock defaults to local
/// time and can be replaced with [`with_clock`](Self::with_clock) for
/// deterministic output. Calls into the sink are not serialized.
///
/// # Examples
///
/// ```
/// use chainlog::log::{ConsoleLogger, LogFormatConfig, Logger};
/// use chainlog::LogString;
/// use chrono::{TimeZone, Utc};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let lines = Rc::new(RefCell::new(Vec::new()));
/// let out = Rc::clone(&lines);
/// let config = LogFormatConfig::formatted("[date] [log]")
///     .with_date_format("%H:%M:%S");
/// let logger = ConsoleLogger::with_config(config, move |line| out.borrow_mut().push(line.to_owned()))
///     .with_clock(|| Utc.with_ymd_and_hms(2023, 2, 2, 15, 15, 15).unwrap().fixed_offset());
///
/// logger.info(&LogString::new("ready"));
/// assert_eq!(lines.borrow()[0], "15:15:15 ready\x1b[0m");
/// ```
pub struct ConsoleLogger {
    config: LogFormatConfig,
    sink: Sink,
    clock: Clock,
}

impl ConsoleLogger {
    /// Uses `config` as given, without validating the date pattern.
    pub fn with_config(config: LogFormatConfig, sink: impl Fn(&str) + 'static) -> Self {
        Self { config, sink: Box::new(sink), clock: Box::new(local_now) }
    }

    /// Explicit date pattern, format and level colors, with level coloring on.
    pub fn console(
        date_format: impl Into<String>,
        format: impl Into<String>,
        level_colors: BTreeMap<String, Color>,
        sink: impl Fn(&str) + 'static,
    ) -> Result<Self, ErrorChain<ConfigError>> {
        let config = LogFormatConfig::new(date_format, format, level_colors);
        config.validate().map_err(|e| e.caused("could not build console logger"))?;
        Ok(Self::with_config(config, sink))
    }

    /// Custom token format on top of the default date pattern and level colors.
    pub fn formatted(format: impl Into<String>, sink: impl Fn(&str) + 'static) -> Self {
        Self::with_config(LogFormatConfig::formatted(format), sink)
    }

    /// The [`LogFormatConfig::simple`] preset.
    pub fn simple(sink: impl Fn(&str) + 'static) -> Self {
        Self::with_config(LogFormatConfig::simple(), sink)
    }

    /// The simple preset printing each line to stdout.
    pub fn stdout() -> Self {
        Self::simple(|line| println!("{line}"))
    }

    /// Replaces the timestamp source.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<FixedOffset> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[inline]
    pub fn config(&self) -> &LogFormatConfig {
        &self.config
    }

    /// Renders a line at `level` using the current clock, without emitting it.
    pub fn render(&self, level: Level, message: &dyn Loggable) -> String {
        render(level.as_str(), message, &self.config, &(self.clock)())
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: Level, message: &dyn Loggable) {
        (self.sink)(&self.render(level, message));
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger").field("config", &self.config).finish_non_exhaustive()
    }
}
