//! Contract error types for the inventory service
//!
//! These errors are transport-agnostic; the REST layer maps them onto the
//! externally visible HTTP taxonomy.

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Payload field name
    pub field: String,
    /// What was wrong with it
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Inventory domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// Payload missing a required field or carrying an out-of-enum value.
    /// Reported before any store write; carries every offending field.
    #[error("validation failed: {}", format_violations(.violations))]
    Validation { violations: Vec<FieldViolation> },

    /// Referenced id does not exist for get/update/delete
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: i32 },

    /// Uniqueness or foreign-key rule broken at write time
    #[error("constraint violated: {reason}")]
    Constraint { reason: String },

    /// Unexpected store failure; scoped to the single request
    #[error("internal error")]
    Internal,
}

impl InventoryError {
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn constraint(reason: impl Into<String>) -> Self {
        Self::Constraint {
            reason: reason.into(),
        }
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}
