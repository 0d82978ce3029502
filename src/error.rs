//! Error types for rolegate

use thiserror::Error;

use crate::{Action, Role};

/// The main error type for rolegate operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("role {0} appears more than once")]
    DuplicateRole(Role),
    #[error("role {role} lists {action} more than once")]
    DuplicateAction { role: Role, action: Action },
    #[error("invalid email: {0}")]
    InvalidEmail(String),
    #[error("invalid permission table: {0}")]
    Table(String),
}

/// Result type alias for rolegate operations
pub type Result<T> = std::result::Result<T, GateError>;

/// Convert a table decoding error to GateError
pub(crate) fn table_err<E: std::error::Error>(e: E) -> GateError {
    GateError::Table(e.to_string())
}
