//! Application dashboards: the finance-head sanction table, the principal
//! review table and the read-only HOD table.
//!
//! The component only wires Yew to `common::table::ApplicationsTable`, which
//! owns search, pagination, drafts and the local cache. Rows are refetched
//! every minute so server-computed fields reconcile with local patches.

use gloo_timers::callback::Interval;
use yew::prelude::*;

mod document_dialog;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::{ApplicationsProps, TableMode};
pub use state::ApplicationsPage;

const REFRESH_MILLIS: u32 = 60_000;

impl Component for ApplicationsPage {
    type Message = Msg;
    type Properties = ApplicationsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ApplicationsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
            let link = ctx.link().clone();
            self.refresh = Some(Interval::new(REFRESH_MILLIS, move || {
                link.send_message(Msg::Load)
            }));
        }
    }
}
