//! Core traits shared by the error chain and the log formatter.
//!
//! - [`Loggable`]: anything that yields a single log message
//! - [`ResultExt`]: wraps a plain `Result` error into an [`ErrorChain`](crate::ErrorChain)
//! - [`ChainResultExt`]: keeps annotating a `Result` that already carries a chain

pub mod loggable;
pub mod result_ext;

pub use loggable::Loggable;
pub use result_ext::{ChainResultExt, ResultExt};
