//! Error taxonomy for calls to the scholarship service.
//!
//! Remote failures are split into transport errors, non-2xx responses and
//! undecodable bodies. Local validation failures never reach the network; they
//! are raised before a request is built. A duplicate application is a
//! structured case of its own because the upload page reacts to it by
//! redirecting instead of reporting a failure.

use serde::Deserialize;
use thiserror::Error;

/// Structured code the service sends for a second upload by the same student.
pub const DUPLICATE_APPLICATION_CODE: &str = "DUPLICATE_APPLICATION";

/// Message fragment older deployments return for the same condition.
const LEGACY_DUPLICATE_FRAGMENT: &str = "Unique constraint failed on the fields: (`studentId`)";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    IncompleteStudentDetails,

    #[error("Please select a department from the list.")]
    UnknownBranch(String),

    #[error("Please upload all required documents.")]
    MissingDocuments,

    #[error("User not authenticated.")]
    NotAuthenticated,

    #[error("Please enter a valid amount.")]
    InvalidAmount,

    #[error("Title and message are required.")]
    EmptyNotification,

    #[error("Application {0} is not loaded.")]
    UnknownApplication(String),

    #[error("An update for this application is already in progress.")]
    UpdateInFlight(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("an application already exists for this student")]
    DuplicateApplication,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl ClientError {
    /// Classifies a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        if parsed.code.as_deref() == Some(DUPLICATE_APPLICATION_CODE)
            || parsed
                .error
                .as_deref()
                .is_some_and(|e| e.contains(LEGACY_DUPLICATE_FRAGMENT))
        {
            return ClientError::DuplicateApplication;
        }

        let message = parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "Unknown error".to_string()
                } else {
                    trimmed.to_string()
                }
            });

        ClientError::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_duplicate_code_is_recognised() {
        let err = ClientError::from_response(409, r#"{"code":"DUPLICATE_APPLICATION"}"#);
        assert_eq!(err, ClientError::DuplicateApplication);
    }

    #[test]
    fn legacy_duplicate_message_is_recognised() {
        let body = r#"{"error":"\nInvalid `prisma.application.create()` invocation:\n\nUnique constraint failed on the fields: (`studentId`)"}"#;
        assert_eq!(
            ClientError::from_response(500, body),
            ClientError::DuplicateApplication
        );
    }

    #[test]
    fn message_field_is_preferred() {
        let err = ClientError::from_response(400, r#"{"error":"Bad","message":"Missing file"}"#);
        assert_eq!(
            err,
            ClientError::Status {
                status: 400,
                message: "Missing file".to_string()
            }
        );
    }

    #[test]
    fn plain_body_and_empty_body() {
        assert_eq!(
            ClientError::from_response(502, "Bad Gateway"),
            ClientError::Status {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
        assert_eq!(
            ClientError::from_response(500, "  "),
            ClientError::Status {
                status: 500,
                message: "Unknown error".to_string()
            }
        );
    }

    #[test]
    fn validation_messages_are_user_facing() {
        let err: ClientError = ValidationError::InvalidAmount.into();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(err.to_string(), "Please enter a valid amount.");
    }
}
