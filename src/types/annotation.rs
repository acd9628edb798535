//! A single layer of causal context attached to an [`ErrorChain`](crate::ErrorChain).

use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// One causal-context entry: a message plus an optional free-text location.
///
/// Annotations are immutable once created. An empty location means "no
/// location" and is omitted from the rendered trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    message: String,
    location: String,
}

impl Annotation {
    /// Creates an annotation without a location.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), location: String::new() }
    }

    /// Creates an annotation tagged with a location.
    #[inline]
    pub fn at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self { message: message.into(), location: location.into() }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the location, or `None` when it is empty.
    #[inline]
    pub fn location(&self) -> Option<&str> {
        if self.location.is_empty() {
            None
        } else {
            Some(&self.location)
        }
    }

    /// Raw location text, empty when absent.
    #[inline]
    pub(crate) fn location_raw(&self) -> &str {
        &self.location
    }
}

/// Renders the trace lines for this annotation, each terminated by `\n`.
impl Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "caused: {}", self.message)?;
        if let Some(location) = self.location() {
            writeln!(f, "    at: {}", location)?;
        }
        Ok(())
    }
}
