//! Marker Error Types
//!
//! This module defines the [`MarkerError`] enum, which covers every failure the grading core can
//! surface to a caller. Per-item problems (a missing response, a malformed line summary, an
//! unrecognised question type) are absorbed into neutral verdicts and never show up here; only
//! hydration-level and export-level failures do.
//!
//! # Example
//!
//! ```rust
//! use marker::error::MarkerError;
//!
//! fn find_question(id: &str) -> Result<(), MarkerError> {
//!     Err(MarkerError::missing("question", id))
//! }
//!
//! assert!(find_question("q1").unwrap_err().is_missing_input());
//! ```

/// Represents all error types that can occur in the marker system.
#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    /// An entity referenced by id could not be found while hydrating the graph.
    #[error("{entity} not found: {id}")]
    MissingInput { entity: &'static str, id: String },

    /// A member's external attributes are present but do not hold a usable identifier.
    #[error("invalid attribute '{key}' on member {member}: {reason}")]
    InvalidAttribute {
        member: String,
        key: String,
        reason: String,
    },

    /// The delimited-text writer rejected a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The export buffer could not be finalised.
    #[error("export error: {0}")]
    Export(String),
}

impl MarkerError {
    /// Shorthand for [`MarkerError::MissingInput`].
    pub fn missing(entity: &'static str, id: impl Into<String>) -> Self {
        MarkerError::MissingInput {
            entity,
            id: id.into(),
        }
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, MarkerError::MissingInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_message_names_entity_and_id() {
        let err = MarkerError::missing("group", "g42");
        assert!(err.is_missing_input());
        assert_eq!(err.to_string(), "group not found: g42");
    }

    #[test]
    fn invalid_attribute_is_not_missing_input() {
        let err = MarkerError::InvalidAttribute {
            member: "m1".into(),
            key: "k".into(),
            reason: "missing".into(),
        };
        assert!(!err.is_missing_input());
        assert!(err.to_string().contains("m1"));
    }
}
