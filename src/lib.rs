//! Chainable error values and a token-driven console log formatter.
//!
//! The crate has two cooperating halves:
//!
//! - [`ErrorChain`]: a base failure plus an ordered stack of annotations, an
//!   integer classification code, a human-readable trace and a JSON projection.
//! - [`log`]: renders a level, a timestamp and a message through a bracketed
//!   token format such as `"[date] [level]: [log]"`, with optional ANSI colors.
//!
//! Anything implementing [`Loggable`] (error chains, [`LogString`], plain
//! strings) can be handed to a logger.
//!
//! # Examples
//!
//! ## Building and logging a chain
//!
//! ```
//! use chainlog::log::{ConsoleLogger, Logger};
//! use chainlog::ErrorChain;
//!
//! fn fetch() -> ErrorChain {
//!     ErrorChain::boxed("connection reset")
//!         .caused_at("could not fetch profile", "client::fetch")
//!         .set_code(502)
//! }
//!
//! let logger = ConsoleLogger::simple(|line| eprintln!("{line}"));
//! let err = fetch().log_if_err(logger.sink());
//! assert_eq!(err.error_code(), 502);
//! ```
//!
//! ## JSON projection
//!
//! ```
//! use chainlog::{ChainProjection, ErrorChain};
//!
//! let json = ErrorChain::new("root error")
//!     .caused("first")
//!     .caused_at("second", "handler")
//!     .to_json()
//!     .unwrap();
//!
//! let decoded: ChainProjection = serde_json::from_str(&json).unwrap();
//! assert_eq!(decoded.root, "root error");
//! assert_eq!(decoded.errors[1].order, 1);
//! assert_eq!(decoded.errors[1].at, "handler");
//! ```

/// Log line formatting, colors and loggers
pub mod log;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for loggable values and result extensions
pub mod traits;
/// ErrorChain and its supporting types
pub mod types;

pub use traits::*;
pub use types::{
    Annotation, BoxError, ChainProjection, ChainResult, ErrorChain, ErrorVec, LogString,
    ProjectedAnnotation, JSON_FAILURE_LOCATION,
};
