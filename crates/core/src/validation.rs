//! Field-level constraint checks.
//!
//! Collects every violated constraint instead of stopping at the first one,
//! so a client sees all problems with a request at once.

use crate::error::ValidationError;

/// Accumulates constraint violations for a single value.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject empty or whitespace-only strings.
    pub fn not_blank(mut self, value: &str, message: &str) -> Self {
        if value.trim().is_empty() {
            self.violations.push(message.to_string());
        }
        self
    }

    /// Require `value >= min`.
    pub fn min<T: PartialOrd>(mut self, value: T, min: T, message: &str) -> Self {
        if value < min {
            self.violations.push(message.to_string());
        }
        self
    }

    /// Require `value <= max`.
    pub fn max<T: PartialOrd>(mut self, value: T, max: T, message: &str) -> Self {
        if value > max {
            self.violations.push(message.to_string());
        }
        self
    }

    /// Require a strictly positive, finite number.
    pub fn positive(mut self, value: f64, message: &str) -> Self {
        if !(value.is_finite() && value > 0.0) {
            self.violations.push(message.to_string());
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::from_violations(self.violations))
        }
    }
}
