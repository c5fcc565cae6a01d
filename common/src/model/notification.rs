use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who a feed item is attributed to.
///
/// The service historically only sent an `isAdmin` flag, which describes the
/// audience rather than the author. Newer responses may carry `senderRole`;
/// when they do it wins over any inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderRole {
    FinanceHead,
    Principal,
    Hod,
    System,
}

impl SenderRole {
    pub fn label(&self) -> &'static str {
        match self {
            SenderRole::FinanceHead => "Finance Head",
            SenderRole::Principal => "Principal",
            SenderRole::Hod => "HOD",
            SenderRole::System => "System",
        }
    }
}

/// A notification as stored by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub sender_role: Option<SenderRole>,
    pub created_at: DateTime<Utc>,
}

/// Body of `/notifications/hod/{applicationId}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HodFeedback {
    #[serde(default)]
    pub hod_feedback: Option<String>,
}

/// Body of `/notifications/principal/{applicationId}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalFeedback {
    #[serde(default)]
    pub principal_feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_payload_has_no_sender_role() {
        let raw = r#"{"id":"n1","userId":"u1","title":"Deadline","message":"Submit by Friday","isAdmin":true,"createdAt":"2024-10-01T08:00:00Z"}"#;
        let n: Notification = serde_json::from_str(raw).unwrap();
        assert!(n.is_admin);
        assert_eq!(n.sender_role, None);
    }

    #[test]
    fn explicit_sender_role_decodes() {
        let raw = r#"{"id":"n2","title":"t","message":"m","isAdmin":false,"senderRole":"hod","createdAt":"2024-10-01T08:00:00Z"}"#;
        let n: Notification = serde_json::from_str(raw).unwrap();
        assert_eq!(n.sender_role, Some(SenderRole::Hod));
        assert_eq!(n.user_id, None);
    }
}
