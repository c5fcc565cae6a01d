//! Request payloads sent to the scholarship service and the envelopes it
//! answers with.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::application::ScholarshipStatus;
use crate::model::branch::is_known_branch;

/// Body of `PATCH /applications/{id}/approve/finance-head`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceApproval {
    pub approve: bool,
    pub amount: f64,
}

/// Body of `PATCH /applications/{id}/approve/principal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalApproval {
    pub approve: bool,
    pub principal_feedback: String,
}

/// Who a posted notification is meant for. Serialized as the `isAdmin` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Audience {
    #[default]
    Admins,
    Students,
}

impl Audience {
    pub const ALL: [Audience; 2] = [Audience::Admins, Audience::Students];

    pub fn is_admin(&self) -> bool {
        matches!(self, Audience::Admins)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Audience::Admins => "Admin",
            Audience::Students => "For Students",
        }
    }
}

/// Body of `POST /notifications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub is_admin: bool,
}

/// Text fields of the multipart upload, validated by step one of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDetails {
    pub name: String,
    pub branch: String,
    pub roll_no: String,
}

impl StudentDetails {
    /// Trims and checks the three text inputs.
    pub fn validate(name: &str, branch: &str, roll_no: &str) -> Result<Self, ValidationError> {
        let (name, branch, roll_no) = (name.trim(), branch.trim(), roll_no.trim());
        if name.is_empty() || branch.is_empty() || roll_no.is_empty() {
            return Err(ValidationError::IncompleteStudentDetails);
        }
        if !is_known_branch(branch) {
            return Err(ValidationError::UnknownBranch(branch.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            branch: branch.to_string(),
            roll_no: roll_no.to_string(),
        })
    }

    /// Text parts of the multipart form, in the order the service expects.
    pub fn form_fields<'a>(&'a self, student_id: &'a str) -> [(&'static str, &'a str); 4] {
        [
            ("name", self.name.as_str()),
            ("branch", self.branch.as_str()),
            ("rollNo", self.roll_no.as_str()),
            ("studentId", student_id),
        ]
    }
}

/// Multipart field names of the three documents.
pub const DOCUMENT_FIELDS: [(&str, &str); 3] = [
    ("aadharCard", "Aadhaar Card"),
    ("incomeCertificate", "Income Certificate"),
    ("marksheet", "Marksheet/College ID"),
];

/// Step two of the upload form: every document must be chosen and the
/// uploader must be signed in.
pub fn check_upload_ready(
    documents_selected: usize,
    student_id: Option<&str>,
) -> Result<String, ValidationError> {
    if documents_selected < DOCUMENT_FIELDS.len() {
        return Err(ValidationError::MissingDocuments);
    }
    match student_id {
        Some(id) if !id.trim().is_empty() => Ok(id.to_string()),
        _ => Err(ValidationError::NotAuthenticated),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedApplication {
    pub id: String,
}

/// Body of a successful `POST /student/upload-documents`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub application: CreatedApplication,
}

/// Body of `GET /student/tracking-status/{applicationId}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResponse {
    pub tracking_status: ScholarshipStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_body_uses_camel_case() {
        let body = serde_json::to_value(PrincipalApproval {
            approve: false,
            principal_feedback: "Income proof unclear".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"approve": false, "principalFeedback": "Income proof unclear"})
        );
    }

    #[test]
    fn student_details_are_trimmed_and_required() {
        let ok = StudentDetails::validate("  Ravi ", "Civil Engineering", " 17 ").unwrap();
        assert_eq!(ok.name, "Ravi");
        assert_eq!(ok.roll_no, "17");
        assert_eq!(
            StudentDetails::validate("Ravi", "", "17"),
            Err(ValidationError::IncompleteStudentDetails)
        );
        assert_eq!(
            StudentDetails::validate("   ", "Civil Engineering", "17"),
            Err(ValidationError::IncompleteStudentDetails)
        );
        assert!(matches!(
            StudentDetails::validate("Ravi", "Astrology", "17"),
            Err(ValidationError::UnknownBranch(_))
        ));
    }

    #[test]
    fn upload_needs_all_documents_then_identity() {
        assert_eq!(
            check_upload_ready(2, Some("user_1")),
            Err(ValidationError::MissingDocuments)
        );
        assert_eq!(
            check_upload_ready(3, None),
            Err(ValidationError::NotAuthenticated)
        );
        assert_eq!(check_upload_ready(3, Some("user_1")), Ok("user_1".to_string()));
    }

    #[test]
    fn upload_response_carries_application_id() {
        let raw = r#"{"message":"ok","application":{"id":"app-9","name":"Ravi"}}"#;
        let resp: UploadResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.application.id, "app-9");
    }
}
