//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::{FieldViolation, InventoryError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Per-field violations for validation failures (extension member)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ProblemField>>,
}

/// One offending payload field
#[derive(Debug, Serialize)]
pub struct ProblemField {
    pub field: String,
    pub message: String,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            errors: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_field_errors(mut self, violations: Vec<FieldViolation>) -> Self {
        self.errors = Some(
            violations
                .into_iter()
                .map(|v| ProblemField {
                    field: v.field,
                    message: v.message,
                })
                .collect(),
        );
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: InventoryError) -> Problem {
    match error {
        InventoryError::Validation { violations } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error")
                .with_detail("One or more payload fields are invalid")
                .with_field_errors(violations)
        }

        InventoryError::NotFound { resource, id } => {
            Problem::new(StatusCode::NOT_FOUND, format!("{resource} not found"))
                .with_detail(format!("No {resource} with id {id}"))
        }

        InventoryError::Constraint { reason } => {
            Problem::new(StatusCode::CONFLICT, "Constraint Violation").with_detail(reason)
        }

        InventoryError::Internal => {
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_problem_carries_field_errors() {
        let problem = map_domain_error(InventoryError::validation(vec![FieldViolation {
            field: "kind".into(),
            message: "unrecognized value".into(),
        }]));
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["type"], "https://httpstatuses.io/400");
        assert_eq!(json["errors"][0]["field"], "kind");
    }

    #[test]
    fn not_found_problem_omits_field_errors() {
        let problem = map_domain_error(InventoryError::not_found("site", 42));
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["status"], 404);
        assert!(json.get("errors").is_none());
        assert_eq!(json["detail"], "No site with id 42");
    }
}
