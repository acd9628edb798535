//! Extension traits for building error chains straight from `Result` values.
//!
//! # Examples
//!
//! ```
//! use chainlog::traits::{ChainResultExt, ResultExt};
//! use chainlog::ChainResult;
//!
//! fn read_port(raw: &str) -> ChainResult<u16, std::num::ParseIntError> {
//!     raw.parse::<u16>().caused_at("invalid port", "config::read_port")
//! }
//!
//! fn load(raw: &str) -> ChainResult<u16, std::num::ParseIntError> {
//!     read_port(raw).then_caused("could not load settings").with_code(400)
//! }
//!
//! let err = load("eighty").unwrap_err();
//! assert_eq!(err.depth(), 2);
//! assert_eq!(err.error_code(), 400);
//! ```

use core::fmt::Display;

use crate::traits::Loggable;
use crate::types::ErrorChain;

/// Wraps the error of a plain `Result` into an [`ErrorChain`] and annotates it.
pub trait ResultExt<T, E> {
    /// Wraps the error and appends an annotation without a location.
    fn caused(self, message: impl Into<String>) -> Result<T, ErrorChain<E>>;

    /// Wraps the error and appends an annotation with a location.
    fn caused_at(
        self,
        message: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<T, ErrorChain<E>>;

    /// Wraps the error and appends a lazily built annotation.
    ///
    /// The closure only runs when the `Result` is an `Err`.
    fn caused_with<F>(self, f: F) -> Result<T, ErrorChain<E>>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn caused(self, message: impl Into<String>) -> Result<T, ErrorChain<E>> {
        self.map_err(|e| ErrorChain::new(e).caused(message))
    }

    #[inline]
    fn caused_at(
        self,
        message: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<T, ErrorChain<E>> {
        self.map_err(|e| ErrorChain::new(e).caused_at(message, location))
    }

    #[inline]
    fn caused_with<F>(self, f: F) -> Result<T, ErrorChain<E>>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ErrorChain::new(e).caused(f()))
    }
}

/// Continues annotating a `Result` that already carries an [`ErrorChain`].
pub trait ChainResultExt<T, E> {
    /// Appends an annotation without a location to the carried chain.
    fn then_caused(self, message: impl Into<String>) -> Self;

    /// Appends an annotation with a location to the carried chain.
    fn then_caused_at(self, message: impl Into<String>, location: impl Into<String>) -> Self;

    /// Sets the classification code on the carried chain.
    fn with_code(self, code: i64) -> Self;

    /// Hands the carried chain to `sink`, leaving the `Result` unchanged.
    fn log_if_err<F>(self, sink: F) -> Self
    where
        F: FnOnce(&dyn Loggable);
}

impl<T, E: Display> ChainResultExt<T, E> for Result<T, ErrorChain<E>> {
    #[inline]
    fn then_caused(self, message: impl Into<String>) -> Self {
        self.map_err(|chain| chain.caused(message))
    }

    #[inline]
    fn then_caused_at(self, message: impl Into<String>, location: impl Into<String>) -> Self {
        self.map_err(|chain| chain.caused_at(message, location))
    }

    #[inline]
    fn with_code(self, code: i64) -> Self {
        self.map_err(|chain| chain.set_code(code))
    }

    #[inline]
    fn log_if_err<F>(self, sink: F) -> Self
    where
        F: FnOnce(&dyn Loggable),
    {
        self.map_err(|chain| chain.log_if_err(sink))
    }
}
