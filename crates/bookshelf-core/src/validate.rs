//! Declarative per-field request validation.
//!
//! Request types declare their constraints in field order through a
//! [`Rules`] collector. Checking is not fail-fast: every violated field
//! contributes one message of the form `error <Field> on tag <Constraint>`,
//! and the full ordered list is wrapped into a bad-request [`CustomError`].

use crate::response::CustomError;

/// A request type that can validate itself.
pub trait Validate {
    /// Check all field constraints, collecting every violation.
    fn validate(&self) -> Result<(), CustomError>;
}

/// Collector for field constraint violations.
///
/// Fields must be checked in declaration order; the resulting message
/// list preserves that order.
#[derive(Debug, Default)]
pub struct Rules {
    violations: Vec<String>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    fn violation(&mut self, field: &str, tag: &str) {
        self.violations.push(format!("error {field} on tag {tag}"));
    }

    /// `required` on a string field: must be non-empty.
    pub fn required_str(&mut self, field: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.violation(field, "required");
        }
        self
    }

    /// `required` on a numeric id field: zero counts as missing.
    pub fn required_id(&mut self, field: &str, value: i64) -> &mut Self {
        if value == 0 {
            self.violation(field, "required");
        }
        self
    }

    /// `required,min=..,max=..` on a string field. Only the first failing
    /// tag is reported for the field; length is counted in characters.
    pub fn bounded_str(&mut self, field: &str, value: &str, min: usize, max: usize) -> &mut Self {
        if value.is_empty() {
            self.violation(field, "required");
        } else {
            let len = value.chars().count();
            if len < min {
                self.violation(field, "min");
            } else if len > max {
                self.violation(field, "max");
            }
        }
        self
    }

    /// Produce the collected violations as a bad-request error, or `Ok`
    /// when every constraint held.
    pub fn finish(self) -> Result<(), CustomError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(CustomError::bad_request_with_info(self.violations))
        }
    }
}
