//! Field validation error model.

use thiserror::Error;

/// Result type used by request/field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One or more violated field constraints.
///
/// Each entry is the constraint's human-readable message. The display form
/// joins them with newlines so it can be returned to a client verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .violations.join("\n"))]
pub struct ValidationError {
    violations: Vec<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            violations: vec![message.into()],
        }
    }

    pub fn from_violations(violations: Vec<String>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}
