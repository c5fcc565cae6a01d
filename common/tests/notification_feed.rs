mod support;

use chrono::{TimeZone, Utc};
use common::api::Method;
use common::error::ValidationError;
use common::feed::{FeedBatch, NotificationFeed};
use common::model::notification::{Notification, SenderRole};
use common::requests::Audience;
use common::routing::Role;
use support::FakeGateway;

fn notification(id: &str, is_admin: bool, minute: u32) -> Notification {
    Notification {
        id: id.to_string(),
        user_id: None,
        title: format!("Title {id}"),
        message: format!("Body {id}"),
        is_admin,
        sender_role: None,
        created_at: Utc.with_ymd_and_hms(2024, 6, 3, 10, minute, 0).unwrap(),
    }
}

#[test]
fn later_item_from_second_source_comes_first() {
    let mut feed = NotificationFeed::new(Some(Role::Principal));
    let ticket = feed.begin_load();
    let admin = FeedBatch::Notifications(vec![notification("t1", true, 5)]);
    let user = FeedBatch::Notifications(vec![notification("t2", false, 40)]);
    assert!(feed.finish_load(ticket, vec![admin, user]));

    let ids: Vec<_> = feed.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["t2", "t1"]);
    assert_eq!(feed.items()[0].sender, SenderRole::Principal);
    assert_eq!(feed.items()[1].sender, SenderRole::FinanceHead);
}

#[test]
fn empty_title_or_message_is_a_no_op() {
    let mut gateway = FakeGateway::default();
    let mut feed = NotificationFeed::new(Some(Role::FinanceHead));
    let ticket = feed.begin_load();
    feed.finish_load(ticket, vec![FeedBatch::Notifications(vec![notification("x", true, 1)])]);

    for (title, message) in [("", "Body"), ("Title", ""), ("   ", "Body")] {
        let attempt = feed.prepare_post(Some("user_1"), title, message, Audience::Admins);
        assert_eq!(attempt, Err(ValidationError::EmptyNotification));
    }
    assert_eq!(gateway.count(Method::Post), 0);
    assert_eq!(feed.items().len(), 1);
    assert!(!feed.is_posting());

    let body = feed
        .prepare_post(Some("user_1"), "Disbursal", "Funds released today", Audience::Admins)
        .unwrap();
    let notice = feed.finish_post(gateway.post_notification(&body));
    assert!(!notice.is_error());
    assert_eq!(gateway.count(Method::Post), 1);
    assert_eq!(feed.items()[0].id, "n-1");
    assert_eq!(feed.items()[0].title.as_deref(), Some("Disbursal"));
    assert_eq!(feed.items()[0].sender, SenderRole::FinanceHead);
}

#[test]
fn failed_post_keeps_feed() {
    let mut feed = NotificationFeed::new(Some(Role::Hod));
    feed.prepare_post(Some("user_1"), "t", "m", Audience::Students)
        .unwrap();
    let notice = feed.finish_post(Err(common::error::ClientError::Transport("offline".into())));
    assert!(notice.is_error());
    assert!(feed.items().is_empty());
    assert!(!feed.is_posting());
}
