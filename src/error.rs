use thiserror::Error;

/// Returned when a string names no known naming convention
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown naming convention '{input}' (expected one of: {expected})")]
pub struct ParseConventionError {
    pub input: String,
    pub expected: String,
}
