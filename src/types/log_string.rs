use core::fmt::{self, Display};

use crate::traits::Loggable;

/// Plain text that can be handed to a logger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LogString(String);

impl LogString {
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Loggable for LogString {
    fn message(&self) -> String {
        self.0.clone()
    }
}

impl Display for LogString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LogString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for LogString {
    fn from(text: String) -> Self {
        Self(text)
    }
}
