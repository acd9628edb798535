//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use chainlog::prelude::*;
//!
//! fn parse(raw: &str) -> ChainResult<u32, std::num::ParseIntError> {
//!     raw.parse::<u32>().caused("parsing request size")
//! }
//!
//! assert!(parse("12").is_ok());
//! ```

// Core types
pub use crate::types::{ChainResult, ErrorChain, LogString};

// Traits
pub use crate::traits::{ChainResultExt, Loggable, ResultExt};

// Logging
pub use crate::log::{ConsoleLogger, Level, LogFormatConfig, Logger};
