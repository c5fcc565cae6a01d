use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall decision on an application, set by the principal step.
///
/// The service sometimes sends an empty string for fresh applications, so any
/// unrecognised value reads as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Approved,
    Rejected,
    #[default]
    #[serde(other)]
    Pending,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Capitalised label used on status buttons.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// A scholarship application as held by the remote service.
///
/// The three approval flags are independent booleans; this client never unsets
/// them. `amount_sanction` stays `None` until the finance head sanctions an
/// amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub student_id: String,
    pub name: String,
    pub roll_no: String,
    pub branch: String,
    /// Opaque URL on the media host.
    pub aadhar_card: String,
    pub marksheet: String,
    pub income_certificate: String,
    #[serde(default)]
    pub approved_by_hod: bool,
    #[serde(default)]
    pub approved_by_principal: bool,
    #[serde(default)]
    pub approved_by_finance_head: bool,
    #[serde(default)]
    pub hod_feedback: Option<String>,
    #[serde(default)]
    pub principal_feedback: Option<String>,
    #[serde(default)]
    pub amount_sanction: Option<f64>,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// The four-flag projection shown to the applicant.
    pub fn tracking_status(&self) -> ScholarshipStatus {
        ScholarshipStatus {
            approved_by_hod: self.approved_by_hod,
            approved_by_principal: self.approved_by_principal,
            approved_by_finance_head: self.approved_by_finance_head,
            amount_sanction: self.amount_sanction,
        }
    }

    /// The document links in display order, paired with their labels.
    pub fn documents(&self) -> [(&'static str, &str); 3] {
        [
            ("Aadhar", self.aadhar_card.as_str()),
            ("Marksheet", self.marksheet.as_str()),
            ("Income Certificate", self.income_certificate.as_str()),
        ]
    }
}

/// Tracking projection returned by `/student/tracking-status/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarshipStatus {
    #[serde(default)]
    pub approved_by_hod: bool,
    #[serde(default)]
    pub approved_by_principal: bool,
    #[serde(default)]
    pub approved_by_finance_head: bool,
    #[serde(default)]
    pub amount_sanction: Option<f64>,
}

/// Server-side filter used by the status browser tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    Accepted,
    Pending,
    Rejected,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::Accepted,
        StatusFilter::Pending,
        StatusFilter::Rejected,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            StatusFilter::Accepted => "accepted",
            StatusFilter::Pending => "pending",
            StatusFilter::Rejected => "rejected",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StatusFilter::Accepted => "Accepted",
            StatusFilter::Pending => "Pending",
            StatusFilter::Rejected => "Rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": "app-1",
        "studentId": "user_2",
        "name": "Asha Verma",
        "rollNo": "CS-042",
        "branch": "Civil Engineering",
        "aadharCard": "https://media.example/a.png",
        "marksheet": "https://media.example/m.png",
        "incomeCertificate": "https://media.example/i.png",
        "approvedByHod": true,
        "approvedByPrincipal": false,
        "approvedByFinanceHead": false,
        "hodFeedback": "Looks fine",
        "principalFeedback": null,
        "amountSanction": null,
        "status": "",
        "createdAt": "2024-11-02T09:30:00.000Z"
    }"#;

    #[test]
    fn decodes_service_record() {
        let app: Application = serde_json::from_str(RECORD).unwrap();
        assert_eq!(app.roll_no, "CS-042");
        assert!(app.approved_by_hod);
        assert_eq!(app.hod_feedback.as_deref(), Some("Looks fine"));
        assert_eq!(app.amount_sanction, None);
        assert_eq!(app.status, ApplicationStatus::Pending);
    }

    #[test]
    fn known_statuses_decode_by_name() {
        let approved: ApplicationStatus = serde_json::from_str("\"approved\"").unwrap();
        let rejected: ApplicationStatus = serde_json::from_str("\"rejected\"").unwrap();
        let odd: ApplicationStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(approved, ApplicationStatus::Approved);
        assert_eq!(rejected, ApplicationStatus::Rejected);
        assert_eq!(odd, ApplicationStatus::Pending);
    }

    #[test]
    fn tracking_status_mirrors_flags() {
        let mut app: Application = serde_json::from_str(RECORD).unwrap();
        app.amount_sanction = Some(1200.0);
        let status = app.tracking_status();
        assert!(status.approved_by_hod);
        assert!(!status.approved_by_principal);
        assert_eq!(status.amount_sanction, Some(1200.0));
    }
}
