//! Structured JSON projection of an [`ErrorChain`].
//!
//! The wire shape is fixed:
//!
//! ```text
//! { "root": string, "code": integer, "errors": [ { "error": string, "order": integer, "at": string } ] }
//! ```
//!
//! `order` is not stored anywhere; it is the annotation's index in the stack
//! at the moment the projection is built.

use core::fmt::Display;

use serde::{Deserialize, Serialize};

use super::ErrorChain;

/// Location tag attached when encoding the projection fails.
pub const JSON_FAILURE_LOCATION: &str = "ErrorChain::to_json serialization";

/// Decoded (or to-be-encoded) form of an error chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainProjection {
    pub root: String,
    pub code: i64,
    pub errors: Vec<ProjectedAnnotation>,
}

/// One annotation inside a [`ChainProjection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedAnnotation {
    pub error: String,
    pub order: usize,
    pub at: String,
}

impl<E: Display> ErrorChain<E> {
    /// Builds the structured projection, or `None` for a success chain.
    pub fn projection(&self) -> Option<ChainProjection> {
        let base = self.base.as_ref()?;
        let errors = self
            .stack
            .iter()
            .enumerate()
            .map(|(order, annotation)| ProjectedAnnotation {
                error: annotation.message().to_owned(),
                order,
                at: annotation.location_raw().to_owned(),
            })
            .collect();

        Some(ChainProjection { root: base.to_string(), code: self.code, errors })
    }

    /// Serializes the projection as compact JSON.
    ///
    /// A success chain serializes to an empty string. Encoding failures come
    /// back as a new chain around the [`serde_json::Error`], annotated with
    /// [`JSON_FAILURE_LOCATION`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlog::ErrorChain;
    ///
    /// let json = ErrorChain::new("root error")
    ///     .set_code(500)
    ///     .caused_at("sub error", "loader")
    ///     .to_json()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     json,
    ///     r#"{"root":"root error","code":500,"errors":[{"error":"sub error","order":0,"at":"loader"}]}"#
    /// );
    /// ```
    pub fn to_json(&self) -> Result<String, ErrorChain<serde_json::Error>> {
        let Some(projection) = self.projection() else {
            return Ok(String::new());
        };

        serde_json::to_string(&projection).map_err(serialization_failure)
    }
}

/// Wraps an encoding failure in its own chain.
pub(crate) fn serialization_failure(e: serde_json::Error) -> ErrorChain<serde_json::Error> {
    ErrorChain::new(e).caused_at("failed to serialize error object", JSON_FAILURE_LOCATION)
}
