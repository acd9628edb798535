//! The message-bearing capability consumed by loggers and sinks.

/// A value that can be rendered into a single log message.
///
/// Implemented by [`ErrorChain`](crate::ErrorChain), [`LogString`](crate::LogString)
/// and plain strings, so any of them can be passed to a
/// [`Logger`](crate::log::Logger) or to
/// [`ErrorChain::log_if_err`](crate::ErrorChain::log_if_err) sinks.
///
/// # Examples
///
/// ```
/// use chainlog::{LogString, Loggable};
///
/// assert_eq!(LogString::new("ready").message(), "ready");
/// assert_eq!("ready".message(), "ready");
/// ```
pub trait Loggable {
    /// Returns the textual content to log.
    fn message(&self) -> String;
}

impl Loggable for str {
    fn message(&self) -> String {
        self.to_owned()
    }
}

impl Loggable for String {
    fn message(&self) -> String {
        self.clone()
    }
}

impl<L: Loggable + ?Sized> Loggable for &L {
    fn message(&self) -> String {
        (**self).message()
    }
}
