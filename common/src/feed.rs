//! Notification feed shown on every notification page.
//!
//! Which streams are fetched depends on the viewer. Each fetched item is
//! attributed to a sender, and all streams are merged newest first. Posting
//! prepends the created item instead of refetching.

use chrono::{DateTime, FixedOffset, Utc};

use crate::api::{Endpoint, NotificationStream};
use crate::display::{format_timestamp, Notice};
use crate::error::{ClientError, ValidationError};
use crate::generation::{RequestGeneration, Ticket};
use crate::model::notification::{HodFeedback, Notification, PrincipalFeedback, SenderRole};
use crate::requests::{Audience, NewNotification};
use crate::routing::Role;

/// One thing the feed fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSource {
    Stream(NotificationStream),
    HodFeedback,
    PrincipalFeedback,
}

impl FeedSource {
    /// Feedback sources need the stored application id; without one they are
    /// skipped.
    pub fn endpoint(&self, application_id: Option<&str>) -> Option<Endpoint> {
        match self {
            FeedSource::Stream(stream) => Some(Endpoint::Notifications(*stream)),
            FeedSource::HodFeedback => application_id.map(|id| Endpoint::HodFeedback(id.to_string())),
            FeedSource::PrincipalFeedback => {
                application_id.map(|id| Endpoint::PrincipalFeedback(id.to_string()))
            }
        }
    }
}

/// Streams fetched for each viewer.
pub fn sources_for(viewer: Option<Role>) -> &'static [FeedSource] {
    const ADMIN: FeedSource = FeedSource::Stream(NotificationStream::Admin);
    const USER: FeedSource = FeedSource::Stream(NotificationStream::User);
    const ADMIN_ONLY: &[FeedSource] = &[ADMIN];
    const BOTH: &[FeedSource] = &[ADMIN, USER];
    const STUDENT: &[FeedSource] = &[USER, FeedSource::HodFeedback, FeedSource::PrincipalFeedback];
    match viewer {
        Some(Role::FinanceHead) | Some(Role::Hod) => ADMIN_ONLY,
        Some(Role::Principal) => BOTH,
        None => STUDENT,
    }
}

/// Attribution for a fetched notification.
///
/// An explicit `senderRole` from the service always wins. Otherwise students
/// see every broadcast as coming from the system, and admins read `isAdmin`
/// as a finance-head post and anything else as a principal post.
pub fn infer_sender(viewer: Option<Role>, notification: &Notification) -> SenderRole {
    if let Some(role) = notification.sender_role {
        return role;
    }
    match viewer {
        None => SenderRole::System,
        Some(_) if notification.is_admin => SenderRole::FinanceHead,
        Some(_) => SenderRole::Principal,
    }
}

fn own_sender(viewer: Option<Role>) -> SenderRole {
    match viewer {
        Some(Role::FinanceHead) => SenderRole::FinanceHead,
        Some(Role::Principal) => SenderRole::Principal,
        Some(Role::Hod) => SenderRole::Hod,
        None => SenderRole::System,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub id: String,
    pub sender: SenderRole,
    pub title: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl FeedItem {
    fn from_notification(viewer: Option<Role>, notification: Notification) -> Self {
        let sender = infer_sender(viewer, &notification);
        Self {
            id: notification.id,
            sender,
            title: Some(notification.title).filter(|t| !t.is_empty()),
            message: notification.message,
            created_at: notification.created_at,
        }
    }

    pub fn display_time(&self, offset: FixedOffset) -> String {
        format_timestamp(&self.created_at, offset)
    }
}

/// A fetched collection, tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedBatch {
    Notifications(Vec<Notification>),
    Hod {
        application_id: String,
        body: HodFeedback,
        fetched_at: DateTime<Utc>,
    },
    Principal {
        application_id: String,
        body: PrincipalFeedback,
        fetched_at: DateTime<Utc>,
    },
}

fn feedback_item(
    prefix: &str,
    sender: SenderRole,
    application_id: &str,
    feedback: Option<String>,
    fetched_at: DateTime<Utc>,
) -> Option<FeedItem> {
    let message = feedback.filter(|f| !f.trim().is_empty())?;
    Some(FeedItem {
        id: format!("{prefix}-{application_id}"),
        sender,
        title: None,
        message,
        created_at: fetched_at,
    })
}

/// Flattens and sorts batches, newest first. Items with equal timestamps keep
/// the order in which their batches were given.
pub fn merge(viewer: Option<Role>, batches: Vec<FeedBatch>) -> Vec<FeedItem> {
    let mut items = Vec::new();
    for batch in batches {
        match batch {
            FeedBatch::Notifications(list) => items.extend(
                list.into_iter()
                    .map(|n| FeedItem::from_notification(viewer, n)),
            ),
            FeedBatch::Hod {
                application_id,
                body,
                fetched_at,
            } => items.extend(feedback_item(
                "hod",
                SenderRole::Hod,
                &application_id,
                body.hod_feedback,
                fetched_at,
            )),
            FeedBatch::Principal {
                application_id,
                body,
                fetched_at,
            } => items.extend(feedback_item(
                "principal",
                SenderRole::Principal,
                &application_id,
                body.principal_feedback,
                fetched_at,
            )),
        }
    }
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items
}

/// Feed state for one notification page.
#[derive(Debug, Default)]
pub struct NotificationFeed {
    viewer: Option<Role>,
    items: Vec<FeedItem>,
    loading: bool,
    posting: bool,
    generation: RequestGeneration,
}

impl NotificationFeed {
    pub fn new(viewer: Option<Role>) -> Self {
        Self {
            viewer,
            ..Self::default()
        }
    }

    pub fn viewer(&self) -> Option<Role> {
        self.viewer
    }

    pub fn sources(&self) -> &'static [FeedSource] {
        sources_for(self.viewer)
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_posting(&self) -> bool {
        self.posting
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.loading = true;
        self.generation.begin()
    }

    /// Replaces the feed with the merged batches. Returns `false` when a newer
    /// load superseded this one.
    pub fn finish_load(&mut self, ticket: Ticket, batches: Vec<FeedBatch>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.items = merge(self.viewer, batches);
        true
    }

    /// Validates a new post. Finance heads always post to admins; students
    /// cannot post. An error means no request may be sent.
    pub fn prepare_post(
        &mut self,
        user_id: Option<&str>,
        title: &str,
        message: &str,
        audience: Audience,
    ) -> Result<NewNotification, ValidationError> {
        if title.trim().is_empty() || message.trim().is_empty() {
            return Err(ValidationError::EmptyNotification);
        }
        let user_id = match (self.viewer, user_id) {
            (Some(_), Some(id)) if !id.trim().is_empty() => id.to_string(),
            _ => return Err(ValidationError::NotAuthenticated),
        };
        let is_admin = match self.viewer {
            Some(Role::FinanceHead) => true,
            _ => audience.is_admin(),
        };
        self.posting = true;
        Ok(NewNotification {
            user_id,
            title: title.to_string(),
            message: message.to_string(),
            is_admin,
        })
    }

    /// Prepends the created notification using the identity and timestamp the
    /// service assigned.
    pub fn finish_post(&mut self, result: Result<Notification, ClientError>) -> Notice {
        self.posting = false;
        match result {
            Ok(created) => {
                let sender = created.sender_role.unwrap_or(own_sender(self.viewer));
                let mut item = FeedItem::from_notification(self.viewer, created);
                item.sender = sender;
                self.items.insert(0, item);
                Notice::success("Notification posted.")
            }
            Err(_) => Notice::error("Failed to post notification."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn note(id: &str, is_admin: bool, hour: u32) -> Notification {
        Notification {
            id: id.to_string(),
            user_id: Some("u".into()),
            title: format!("title {id}"),
            message: format!("message {id}"),
            is_admin,
            sender_role: None,
            created_at: Utc.with_ymd_and_hms(2024, 9, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn sources_depend_on_viewer() {
        assert_eq!(
            sources_for(Some(Role::Principal)),
            &[
                FeedSource::Stream(NotificationStream::Admin),
                FeedSource::Stream(NotificationStream::User)
            ]
        );
        assert_eq!(sources_for(Some(Role::FinanceHead)).len(), 1);
        assert_eq!(sources_for(None).len(), 3);
        assert_eq!(FeedSource::HodFeedback.endpoint(None), None);
        assert_eq!(
            FeedSource::HodFeedback.endpoint(Some("a1")),
            Some(Endpoint::HodFeedback("a1".into()))
        );
    }

    #[test]
    fn sender_inference_table() {
        let mut n = note("1", true, 1);
        assert_eq!(infer_sender(Some(Role::Principal), &n), SenderRole::FinanceHead);
        assert_eq!(infer_sender(None, &n), SenderRole::System);
        n.is_admin = false;
        assert_eq!(infer_sender(Some(Role::Hod), &n), SenderRole::Principal);
        n.sender_role = Some(SenderRole::Hod);
        assert_eq!(infer_sender(Some(Role::FinanceHead), &n), SenderRole::Hod);
    }

    #[test]
    fn merge_sorts_newest_first_across_batches() {
        let items = merge(
            Some(Role::Principal),
            vec![
                FeedBatch::Notifications(vec![note("old", true, 3)]),
                FeedBatch::Notifications(vec![note("new", false, 9), note("mid", false, 5)]),
            ],
        );
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn empty_feedback_is_skipped() {
        let at = Utc.with_ymd_and_hms(2024, 9, 2, 0, 0, 0).unwrap();
        let items = merge(
            None,
            vec![
                FeedBatch::Hod {
                    application_id: "a1".into(),
                    body: HodFeedback {
                        hod_feedback: Some("Attach fee receipt".into()),
                    },
                    fetched_at: at,
                },
                FeedBatch::Principal {
                    application_id: "a1".into(),
                    body: PrincipalFeedback {
                        principal_feedback: Some("   ".into()),
                    },
                    fetched_at: at,
                },
            ],
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "hod-a1");
        assert_eq!(items[0].sender, SenderRole::Hod);
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut feed = NotificationFeed::new(Some(Role::FinanceHead));
        let first = feed.begin_load();
        let second = feed.begin_load();
        assert!(feed.finish_load(second, vec![FeedBatch::Notifications(vec![note("b", true, 2)])]));
        assert!(!feed.finish_load(first, vec![FeedBatch::Notifications(vec![note("a", true, 1)])]));
        assert_eq!(feed.items().len(), 1);
        assert_eq!(feed.items()[0].id, "b");
    }

    #[test]
    fn finance_head_posts_always_target_admins() {
        let mut feed = NotificationFeed::new(Some(Role::FinanceHead));
        let post = feed
            .prepare_post(Some("u1"), "Funds", "Released", Audience::Students)
            .unwrap();
        assert!(post.is_admin);
        assert!(feed.is_posting());
    }

    #[test]
    fn principal_chooses_audience_and_students_cannot_post() {
        let mut feed = NotificationFeed::new(Some(Role::Principal));
        let post = feed
            .prepare_post(Some("u1"), "Exams", "Schedule out", Audience::Students)
            .unwrap();
        assert!(!post.is_admin);

        let mut student = NotificationFeed::new(None);
        assert_eq!(
            student.prepare_post(Some("u1"), "t", "m", Audience::Admins),
            Err(ValidationError::NotAuthenticated)
        );
    }

    #[test]
    fn posted_item_is_prepended_with_server_identity() {
        let mut feed = NotificationFeed::new(Some(Role::Principal));
        let ticket = feed.begin_load();
        feed.finish_load(ticket, vec![FeedBatch::Notifications(vec![note("x", true, 1)])]);
        feed.prepare_post(Some("u1"), "t", "m", Audience::Admins).unwrap();

        let notice = feed.finish_post(Ok(note("server-id", true, 4)));
        assert!(!notice.is_error());
        assert!(!feed.is_posting());
        assert_eq!(feed.items()[0].id, "server-id");
        assert_eq!(feed.items()[0].sender, SenderRole::Principal);
        assert_eq!(feed.items().len(), 2);
    }
}
