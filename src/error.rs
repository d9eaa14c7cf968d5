//! Error types.
//!
//! - [`TupleError`] - why a raw flow tuple string was rejected
//! - [`LoadError`] - failures while loading a flow log document
//!
//! Tuple rejections never cross the flattening boundary; they only show up
//! through [`crate::model::FlowTuple::parse`] and in log lines.

use thiserror::Error;

/// Reason a raw flow tuple string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TupleError {
    /// Input was empty
    #[error("empty flow tuple")]
    Empty,

    /// Input was absent (a `null` entry in the document)
    #[error("absent flow tuple")]
    Absent,

    /// Wrong number of comma-separated fields
    #[error("expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// A numeric field did not parse as an integer of the required width
    #[error("field {field} is not a valid integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Errors from loading a flow log document.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Document is not valid JSON for the flow log schema
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading the document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document exceeds the ingestion size limit
    #[error("document too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_error_display() {
        let err = TupleError::FieldCount {
            expected: 13,
            actual: 8,
        };
        assert_eq!(err.to_string(), "expected 13 fields, got 8");
        assert_eq!(TupleError::Absent.to_string(), "absent flow tuple");

        let err = TupleError::InvalidNumber {
            field: "source_port",
            value: "http".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field source_port is not a valid integer: \"http\""
        );
    }

    #[test]
    fn test_load_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoadError = json_err.into();
        assert!(matches!(err, LoadError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
