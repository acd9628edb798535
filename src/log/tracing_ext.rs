//! Tracing integration.
//!
//! Routes loggable values and error chains into the `tracing` ecosystem
//! instead of a console sink.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! chainlog = { version = "0.3", features = ["tracing"] }
//! ```

use core::fmt::Display;

use crate::log::{Level, Logger};
use crate::traits::Loggable;
use crate::types::ErrorChain;

/// [`Logger`] that emits one `tracing` event per message at the matching level.
///
/// # Example
///
/// ```rust,ignore
/// use chainlog::log::{Logger, TracingLogger};
/// use chainlog::ErrorChain;
///
/// let err = ErrorChain::new("timeout").log_if_err(TracingLogger.sink());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &dyn Loggable) {
        let text = message.message();
        match level {
            Level::Error => tracing::error!(message = %text),
            Level::Info => tracing::info!(message = %text),
            Level::Debug => tracing::debug!(message = %text),
        }
    }
}

impl<E: Display> ErrorChain<E> {
    /// Emits an `error` event describing the chain if it carries a failure,
    /// then returns it unchanged.
    ///
    /// The event records the code, the stack depth, the root cause and the
    /// full trace as separate fields.
    pub fn trace_if_err(self) -> Self {
        if let Some(base) = &self.base {
            tracing::error!(
                code = self.code,
                depth = self.stack.len(),
                root = %base,
                trace = %self.stack_trace(),
                "error chain"
            );
        }
        self
    }
}
