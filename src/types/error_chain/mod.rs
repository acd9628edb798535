//! Chainable error value with an ordered causal stack and a classification code.
//!
//! This module provides [`ErrorChain`], which wraps an optional base failure with:
//! - An append-only stack of [`Annotation`]s, kept in the order they were added
//! - An integer classification code (defaults to `0`)
//! - An optional user-facing message used when the chain is logged
//!
//! A chain without a base failure represents success; [`ErrorChain::is_ok`]
//! is the only predicate that matters for that question.

use core::fmt::{Display, Write};

use crate::traits::Loggable;
use crate::types::{Annotation, BoxError, ErrorVec};

mod json;
mod traits;

pub use json::{ChainProjection, ProjectedAnnotation, JSON_FAILURE_LOCATION};

/// Error value that accumulates causal context as it propagates upward.
///
/// Annotation methods consume the chain and hand the same value back, so a
/// failure can be wrapped, annotated and returned in one expression without
/// copying the stack. A chain has a single owner; it is moved up the call
/// stack rather than shared.
///
/// # Examples
///
/// ```
/// use chainlog::ErrorChain;
///
/// let err = ErrorChain::new("disk full")
///     .caused_at("could not write snapshot", "Store::flush")
///     .caused("checkpoint aborted")
///     .set_code(507);
///
/// assert!(err.is_err());
/// assert_eq!(err.error_code(), 507);
/// assert_eq!(
///     err.stack_trace(),
///     "root cause: disk full\n\
///      caused: could not write snapshot\n    at: Store::flush\n\
///      caused: checkpoint aborted\n"
/// );
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorChain<E = BoxError> {
    pub(crate) base: Option<E>,
    pub(crate) code: i64,
    pub(crate) stack: ErrorVec<Annotation>,
    pub(crate) user_message: Option<String>,
}

impl<E> ErrorChain<E> {
    /// Wraps a base failure with an empty stack and code `0`.
    #[inline]
    pub fn new(base: E) -> Self {
        Self { base: Some(base), code: 0, stack: ErrorVec::new(), user_message: None }
    }

    /// Creates a chain with no base failure, representing success.
    #[inline]
    pub fn empty() -> Self {
        Self { base: None, code: 0, stack: ErrorVec::new(), user_message: None }
    }

    /// Returns `true` when there is no base failure.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.base.is_none()
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        self.base.is_some()
    }

    /// Appends an annotation without a location.
    #[inline]
    pub fn caused(mut self, message: impl Into<String>) -> Self {
        self.stack.push(Annotation::new(message));
        self
    }

    /// Appends an annotation tagged with a location.
    #[inline]
    pub fn caused_at(mut self, message: impl Into<String>, location: impl Into<String>) -> Self {
        self.stack.push(Annotation::at(message, location));
        self
    }

    /// Appends a pre-built annotation.
    #[inline]
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.stack.push(annotation);
        self
    }

    /// Sets (or overrides) the classification code.
    #[inline]
    pub fn set_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Attaches a message meant for end users.
    ///
    /// When present it replaces the full trace as the chain's
    /// [`Loggable::message`], so sinks fed by [`log_if_err`](Self::log_if_err)
    /// only see this text. The trace and JSON projection are unchanged.
    #[inline]
    pub fn user_message(mut self, message: impl Into<String>) -> Self {
        self.user_message = Some(message.into());
        self
    }

    #[inline]
    pub fn user_facing(&self) -> Option<&str> {
        self.user_message.as_deref()
    }

    /// Returns the base failure, if any.
    #[inline]
    pub fn base(&self) -> Option<&E> {
        self.base.as_ref()
    }

    /// Consumes the chain, returning the base failure.
    #[inline]
    pub fn into_base(self) -> Option<E> {
        self.base
    }

    #[inline]
    pub fn error_code(&self) -> i64 {
        self.code
    }

    /// Returns the annotations in the order they were added.
    #[inline]
    pub fn stack(&self) -> &[Annotation] {
        &self.stack
    }

    /// Number of annotations on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Maps the base failure type while preserving stack, code and user message.
    #[inline]
    pub fn map_base<F, T>(self, f: F) -> ErrorChain<T>
    where
        F: FnOnce(E) -> T,
    {
        ErrorChain {
            base: self.base.map(f),
            code: self.code,
            stack: self.stack,
            user_message: self.user_message,
        }
    }

    /// Renders the human-readable trace.
    ///
    /// The first line names the root cause, followed by one `caused:` line per
    /// annotation in insertion order and an indented `at:` line for annotations
    /// that carry a location. Returns an empty string for a success chain.
    #[must_use]
    pub fn stack_trace(&self) -> String
    where
        E: Display,
    {
        let Some(base) = &self.base else {
            return String::new();
        };

        let mut trace = String::with_capacity(32 * (self.stack.len() + 1));
        let _ = writeln!(trace, "root cause: {}", base);
        for annotation in &self.stack {
            let _ = write!(trace, "{}", annotation);
        }
        trace
    }

    /// Hands the chain to `sink` if it carries a failure, then returns it unchanged.
    ///
    /// Success chains never reach the sink.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlog::{ErrorChain, Loggable};
    ///
    /// let mut seen = Vec::new();
    /// let err = ErrorChain::new("timeout")
    ///     .caused("fetch failed")
    ///     .log_if_err(|l| seen.push(l.message()));
    ///
    /// assert!(err.is_err());
    /// assert_eq!(seen, vec!["root cause: timeout\ncaused: fetch failed\n".to_string()]);
    /// ```
    pub fn log_if_err<F>(self, sink: F) -> Self
    where
        E: Display,
        F: FnOnce(&dyn Loggable),
    {
        if self.is_err() {
            sink(&self);
        }
        self
    }
}

impl ErrorChain<BoxError> {
    /// Wraps anything convertible into a [`BoxError`], such as a concrete
    /// error type or a plain message.
    #[inline]
    pub fn boxed(base: impl Into<BoxError>) -> Self {
        Self::new(base.into())
    }
}

impl<E: Display> Loggable for ErrorChain<E> {
    fn message(&self) -> String {
        match &self.user_message {
            Some(user) if self.is_err() => user.clone(),
            _ => self.stack_trace(),
        }
    }
}
