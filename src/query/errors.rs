//! Query error types
//!
//! Every failure while building a query is an invalid argument supplied by
//! the caller. Errors abort query construction; no partial query is returned.

use std::fmt;

use thiserror::Error;

/// Error kinds raised by the query subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// Malformed or out-of-range request input
    InvalidArgument,
}

impl QueryErrorKind {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorKind::InvalidArgument => "OSCAR_QUERY_INVALID_ARGUMENT",
        }
    }
}

impl fmt::Display for QueryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query construction error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A parameter name was empty or whitespace only
    #[error("Parameter name cannot be null or empty")]
    BlankParameterName,

    /// An integer parameter could not be parsed
    #[error("Error with parsing to number of parameter {parameter}: '{value}'")]
    NotAnInteger { parameter: String, value: String },

    /// A lower-bounded parameter was negative
    #[error("{parameter} cannot be less than 0")]
    NegativeBound { parameter: &'static str },

    /// The sort key is not one of the supported values
    #[error("Unsupported sortBy value: '{0}'")]
    UnknownSortKey(String),
}

impl QueryError {
    /// Returns the error kind
    pub fn kind(&self) -> QueryErrorKind {
        QueryErrorKind::InvalidArgument
    }

    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns true for caller input errors
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == QueryErrorKind::InvalidArgument
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_errors_are_invalid_argument() {
        let errors = [
            QueryError::BlankParameterName,
            QueryError::NotAnInteger {
                parameter: "year".into(),
                value: "abcd".into(),
            },
            QueryError::NegativeBound { parameter: "limit" },
            QueryError::UnknownSortKey("rating".into()),
        ];

        for err in errors {
            assert!(err.is_invalid_argument());
            assert_eq!(err.code(), "OSCAR_QUERY_INVALID_ARGUMENT");
        }
    }

    #[test]
    fn test_message_names_parameter() {
        let err = QueryError::NotAnInteger {
            parameter: "minYear".into(),
            value: "x".into(),
        };
        assert!(err.to_string().contains("minYear"));

        let err = QueryError::NegativeBound {
            parameter: "minAwards",
        };
        assert_eq!(err.to_string(), "minAwards cannot be less than 0");
    }
}
