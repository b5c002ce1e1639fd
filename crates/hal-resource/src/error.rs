//! Error types for HAL resource construction and JSON decoding.

use thiserror::Error;

/// Broad classification of a [`HalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// H001: Reserved property key
    ReservedKey,
    /// H002: Item rejected by a relation group or link constructor
    InvalidItem,
    /// H003: Input document is not a well-shaped HAL document
    MalformedInput,
    /// H004: JSON text could not be encoded or decoded
    Json,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "H001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::ReservedKey => "H001",
            ErrorCode::InvalidItem => "H002",
            ErrorCode::MalformedInput => "H003",
            ErrorCode::Json => "H004",
        }
    }
}

/// Error raised by resource mutators and by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HalError {
    // === H001: Reserved key ===
    #[error("[H001] property key {key:?} is reserved")]
    ReservedKey { key: String },

    // === H002: Invalid item ===
    #[error("[H002] invalid item for relation {relation:?}: {reason}")]
    InvalidItem {
        relation: String,
        reason: &'static str,
    },

    #[error("[H002] link href must not be empty")]
    EmptyHref,

    // === H003: Malformed input ===
    #[error("[H003] malformed input at {path}: {reason}")]
    MalformedInput { path: String, reason: &'static str },

    #[error("[H003] embedded resources nested deeper than {max} levels")]
    DepthExceeded { max: usize },

    // === H004: JSON collaborator ===
    #[error("[H004] json {category} error: {message}")]
    Json {
        category: &'static str,
        message: String,
        /// 1-based line of the failure, 0 when not tied to input text.
        line: usize,
        column: usize,
    },
}

impl HalError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            HalError::ReservedKey { .. } => ErrorCode::ReservedKey,
            HalError::InvalidItem { .. } | HalError::EmptyHref => ErrorCode::InvalidItem,
            HalError::MalformedInput { .. } | HalError::DepthExceeded { .. } => {
                ErrorCode::MalformedInput
            }
            HalError::Json { .. } => ErrorCode::Json,
        }
    }

    pub(crate) fn malformed(path: impl Into<String>, reason: &'static str) -> Self {
        HalError::MalformedInput {
            path: path.into(),
            reason,
        }
    }
}

impl From<serde_json::Error> for HalError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let category = match err.classify() {
            Category::Io => "io",
            Category::Syntax => "syntax",
            Category::Data => "data",
            Category::Eof => "eof",
        };
        HalError::Json {
            category,
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = HalError::ReservedKey {
            key: "_links".to_string(),
        };
        assert_eq!(err.code().code(), "H001");
        assert_eq!(err.to_string(), "[H001] property key \"_links\" is reserved");

        assert_eq!(HalError::EmptyHref.code(), ErrorCode::InvalidItem);
        assert_eq!(
            HalError::DepthExceeded { max: 4 }.code(),
            ErrorCode::MalformedInput
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err: HalError = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), ErrorCode::Json);
        match err {
            HalError::Json {
                category,
                line,
                column,
                ..
            } => {
                assert_eq!(category, "syntax");
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err: HalError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, HalError::Json { category: "eof", .. }));
    }
}
