//! Notification page shared by every role.
//!
//! Which streams are read, how items are attributed and who may post is all
//! decided by `common::feed::NotificationFeed`; this component fetches the
//! sources it names and renders the merged result.

use chrono::{DateTime, FixedOffset, Utc};
use common::error::{ClientError, ValidationError};
use common::feed::{FeedBatch, NotificationFeed};
use common::generation::Ticket;
use common::model::notification::Notification;
use common::requests::Audience;
use common::session::Session;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::viewer_offset;
use crate::identity::stored_application_id;
use crate::toast::{show_notice, toast_error};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

mod compose_dialog;

#[derive(Properties, PartialEq)]
pub struct NotificationsProps {
    pub api: ApiClient,
    pub session: Session,
}

pub enum Msg {
    Loaded {
        ticket: Ticket,
        batches: Vec<FeedBatch>,
        failed: usize,
    },
    OpenCompose,
    CloseCompose,
    SetTitle(String),
    SetMessage(String),
    SetAudience(Audience),
    Post,
    Posted(Result<Notification, ClientError>),
}

pub struct NotificationsPage {
    feed: NotificationFeed,
    compose_ref: NodeRef,
    title: String,
    message: String,
    audience: Audience,
    offset: FixedOffset,
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

impl NotificationsPage {
    fn load(&mut self, ctx: &Context<Self>) {
        let ticket = self.feed.begin_load();
        let sources = self.feed.sources();
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        let application_id = stored_application_id();
        spawn_local(async move {
            let mut batches = Vec::new();
            let mut failed = 0;
            for &source in sources {
                match api.feed_batch(source, application_id.as_deref(), now()).await {
                    Some(Ok(batch)) => batches.push(batch),
                    Some(Err(e)) => {
                        error!(format!("Error fetching notifications: {}", e));
                        failed += 1;
                    }
                    None => {}
                }
            }
            link.send_message(Msg::Loaded {
                ticket,
                batches,
                failed,
            });
        });
    }
}

impl Component for NotificationsPage {
    type Message = Msg;
    type Properties = NotificationsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = Self {
            feed: NotificationFeed::new(ctx.props().session.role()),
            compose_ref: NodeRef::default(),
            title: String::new(),
            message: String::new(),
            audience: Audience::default(),
            offset: viewer_offset(),
        };
        page.load(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded {
                ticket,
                batches,
                failed,
            } => {
                if !self.feed.finish_load(ticket, batches) {
                    return false;
                }
                log!(format!("{} notifications", self.feed.items().len()));
                if failed > 0 {
                    toast_error("Some notifications could not be loaded.");
                }
                true
            }
            Msg::OpenCompose => {
                open_top_sheet(&self.compose_ref);
                false
            }
            Msg::CloseCompose => {
                close_top_sheet(&self.compose_ref);
                false
            }
            Msg::SetTitle(title) => {
                self.title = title;
                true
            }
            Msg::SetMessage(message) => {
                self.message = message;
                true
            }
            Msg::SetAudience(audience) => {
                self.audience = audience;
                true
            }
            Msg::Post => {
                if self.feed.is_posting() {
                    return false;
                }
                let session = &ctx.props().session;
                match self
                    .feed
                    .prepare_post(session.user_id(), &self.title, &self.message, self.audience)
                {
                    Ok(body) => {
                        let api = ctx.props().api.clone();
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            link.send_message(Msg::Posted(api.post_notification(&body).await));
                        });
                        true
                    }
                    Err(ValidationError::EmptyNotification) => false,
                    Err(e) => {
                        toast_error(&e.to_string());
                        false
                    }
                }
            }
            Msg::Posted(result) => {
                if let Err(e) = &result {
                    error!(format!("Error posting notification: {}", e));
                }
                let notice = self.feed.finish_post(result);
                if !notice.is_error() {
                    self.title.clear();
                    self.message.clear();
                    close_top_sheet(&self.compose_ref);
                }
                show_notice(&notice);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let can_post = ctx.props().session.actions().post_notifications;
        let items = self.feed.items();

        html! {
            <section class="notifications">
                <div class="page-header">
                    <h1 class="page-title">{ "Notifications" }</h1>
                    if can_post {
                        <button class="outline-btn" onclick={link.callback(|_| Msg::OpenCompose)}>
                            { "New Notification" }
                        </button>
                    }
                </div>
                if self.feed.is_loading() && items.is_empty() {
                    <p class="loading">{ "Loading..." }</p>
                } else if items.is_empty() {
                    <p class="muted">{ "No notifications yet." }</p>
                } else {
                    <ul class="feed">
                        {
                            for items.iter().map(|item| html! {
                                <li key={item.id.clone()} class="feed-item">
                                    <div class="feed-meta">
                                        <span class="sender">{ item.sender.label() }</span>
                                        <span class="time">{ item.display_time(self.offset) }</span>
                                    </div>
                                    if let Some(title) = &item.title {
                                        <h3>{ title.clone() }</h3>
                                    }
                                    <p>{ item.message.clone() }</p>
                                </li>
                            })
                        }
                    </ul>
                }
                if can_post {
                    { compose_dialog::compose_dialog(self, ctx) }
                }
            </section>
        }
    }
}
