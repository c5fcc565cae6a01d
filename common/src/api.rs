//! Endpoints of the remote scholarship service.
//!
//! Paths are relative to the configured base URL (see `config::ClientConfig`).
//! The frontend turns an `Endpoint` into a `gloo-net` request; keeping the
//! table here lets the paths be tested without a browser.

use crate::model::application::StatusFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// Notification streams served under `/notifications/{stream}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationStream {
    Admin,
    User,
}

impl NotificationStream {
    pub fn slug(&self) -> &'static str {
        match self {
            NotificationStream::Admin => "admin",
            NotificationStream::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Applications,
    Scholarships(StatusFilter),
    ApproveFinanceHead(String),
    ApprovePrincipal(String),
    UploadDocuments,
    TrackingStatus(String),
    Notifications(NotificationStream),
    HodFeedback(String),
    PrincipalFeedback(String),
    PostNotification,
    AmountDetails,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ApproveFinanceHead(_) | Endpoint::ApprovePrincipal(_) => Method::Patch,
            Endpoint::UploadDocuments | Endpoint::PostNotification => Method::Post,
            _ => Method::Get,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Applications => "/applications".to_string(),
            Endpoint::Scholarships(filter) => format!("/scholarships/{}", filter.slug()),
            Endpoint::ApproveFinanceHead(id) => format!("/applications/{id}/approve/finance-head"),
            Endpoint::ApprovePrincipal(id) => format!("/applications/{id}/approve/principal"),
            Endpoint::UploadDocuments => "/student/upload-documents".to_string(),
            Endpoint::TrackingStatus(id) => format!("/student/tracking-status/{id}"),
            Endpoint::Notifications(stream) => format!("/notifications/{}", stream.slug()),
            Endpoint::HodFeedback(id) => format!("/notifications/hod/{id}"),
            Endpoint::PrincipalFeedback(id) => format!("/notifications/principal/{id}"),
            Endpoint::PostNotification => "/notifications".to_string(),
            Endpoint::AmountDetails => "/getAmountDetails".to_string(),
        }
    }

    /// Absolute URL under `base`. A trailing slash on the base is ignored.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_routes_are_patches() {
        let ep = Endpoint::ApproveFinanceHead("a1".into());
        assert_eq!(ep.method(), Method::Patch);
        assert_eq!(ep.path(), "/applications/a1/approve/finance-head");
        assert_eq!(
            Endpoint::ApprovePrincipal("a1".into()).path(),
            "/applications/a1/approve/principal"
        );
    }

    #[test]
    fn filtered_and_feedback_paths() {
        assert_eq!(
            Endpoint::Scholarships(StatusFilter::Rejected).path(),
            "/scholarships/rejected"
        );
        assert_eq!(
            Endpoint::Notifications(NotificationStream::User).path(),
            "/notifications/user"
        );
        assert_eq!(Endpoint::HodFeedback("x".into()).path(), "/notifications/hod/x");
        assert_eq!(Endpoint::PostNotification.method(), Method::Post);
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        assert_eq!(
            Endpoint::Applications.url("https://api.example/api/v1/"),
            "https://api.example/api/v1/applications"
        );
        assert_eq!(
            Endpoint::UploadDocuments.url("/api/v1"),
            "/api/v1/student/upload-documents"
        );
    }
}
