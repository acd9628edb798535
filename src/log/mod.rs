//! Template-driven console log formatting.
//!
//! A [`LogFormatConfig`] describes a line layout with bracketed tokens,
//! [`render`] turns a level, a [`Loggable`](crate::Loggable) and a timestamp
//! into a finished line, and [`ConsoleLogger`] wires that to a clock and a sink.
//!
//! # Examples
//!
//! ```
//! use chainlog::log::{render, Color, LogFormatConfig, RESET};
//! use chrono::{TimeZone, Utc};
//!
//! let config = LogFormatConfig::formatted("[date] [level]: [log]")
//!     .with_date_format("%Y-%m-%d %H:%M:%S");
//! let now = Utc.with_ymd_and_hms(2023, 2, 2, 15, 15, 15).unwrap();
//!
//! let line = render("error", "test message", &config, &now);
//! assert_eq!(
//!     line,
//!     format!("2023-02-02 15:15:15 {}ERROR{RESET}: test message{RESET}", Color::Red.escape())
//! );
//! ```

pub mod color;
pub mod config;
pub mod format;
pub mod logger;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use color::{Color, COLORS, RESET};
pub use config::{default_level_colors, ConfigError, LogFormatConfig, DEFAULT_DATE_FORMAT, SIMPLE_FORMAT};
pub use format::{colorize, render, Segment, Tokens};
pub use logger::{Clock, ConsoleLogger, Level, Logger, Sink};

#[cfg(feature = "tracing")]
pub use tracing_ext::TracingLogger;
