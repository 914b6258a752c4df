//! Error types for skein operations
//!
//! Every precondition violation fails fast at the point of detection.
//! An unreachable node is never an error; it is represented by an
//! infinite distance or absence from a result map.

use thiserror::Error;

/// Errors that can occur during graph algorithm runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkeinError {
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("cycle detected through node: {id}")]
    CycleDetected { id: String },

    #[error("invalid weight {weight} on edge {from} -> {to} (negative weights are not supported)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("negative cycle detected through node: {id}")]
    NegativeCycleDetected { id: String },

    #[error("missing weight on edge {from} -> {to}")]
    MissingWeight { from: String, to: String },
}

impl SkeinError {
    /// Create an error for a node absent from a graph or disjoint-set
    pub fn node_not_found(id: impl Into<String>) -> Self {
        SkeinError::NodeNotFound { id: id.into() }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SkeinError::NodeNotFound { .. } => "node_not_found",
            SkeinError::CycleDetected { .. } => "cycle_detected",
            SkeinError::InvalidWeight { .. } => "invalid_weight",
            SkeinError::NegativeCycleDetected { .. } => "negative_cycle_detected",
            SkeinError::MissingWeight { .. } => "missing_weight",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for skein operations
pub type Result<T> = std::result::Result<T, SkeinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_identifiers() {
        let err = SkeinError::node_not_found("a");
        assert_eq!(err.error_type(), "node_not_found");

        let err = SkeinError::CycleDetected { id: "b".to_string() };
        assert_eq!(err.error_type(), "cycle_detected");

        let err = SkeinError::MissingWeight {
            from: "a".to_string(),
            to: "b".to_string(),
        };
        assert_eq!(err.error_type(), "missing_weight");
    }

    #[test]
    fn test_error_to_json() {
        let err = SkeinError::InvalidWeight {
            from: "u".to_string(),
            to: "v".to_string(),
            weight: -1.5,
        };
        let json = err.to_json();
        assert_eq!(json["error"]["type"], "invalid_weight");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("u -> v"));
    }

    #[test]
    fn test_error_display() {
        let err = SkeinError::NegativeCycleDetected { id: "x".to_string() };
        assert_eq!(err.to_string(), "negative cycle detected through node: x");
    }
}
