//! Message handling for the application dashboards.
//!
//! Every write is validated and staged by `ApplicationsTable` first; only a
//! staged change reaches the network, and its outcome is folded back through
//! `ApplicationsTable::complete`.

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::table::LoadOutcome;

use crate::toast::{show_notice, toast_error};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::props::TableMode;
use super::state::ApplicationsPage;

pub fn update(page: &mut ApplicationsPage, ctx: &Context<ApplicationsPage>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::Load => {
            let ticket = page.table.begin_load();
            let api = props.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.applications().await;
                link.send_message(Msg::Loaded(ticket, result));
            });
            true
        }
        Msg::Loaded(ticket, result) => match page.table.finish_load(ticket, result) {
            LoadOutcome::Stale => false,
            LoadOutcome::Loaded(count) => {
                log!(format!("Loaded {} applications", count));
                true
            }
            LoadOutcome::Failed(e) => {
                error!(format!("Error fetching applications: {}", e));
                toast_error("Failed to load applications.");
                true
            }
            LoadOutcome::StillFailing(e) => {
                error!(format!("Error fetching applications: {}", e));
                false
            }
        },
        Msg::SetSearch(query) => {
            page.table.set_search(query);
            true
        }
        Msg::SetPageSize(size) => {
            page.table.set_page_size(size);
            true
        }
        Msg::SetPage(number) => {
            page.table.set_page(number);
            true
        }
        Msg::AmountInput { id, raw } => {
            page.table.set_amount_draft(&id, raw);
            true
        }
        Msg::Sanction(id) => {
            if props.mode != TableMode::Sanction || !props.session.actions().sanction_amounts {
                return false;
            }
            match page.table.request_sanction(&id) {
                Ok(body) => {
                    let api = props.api.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api.approve_finance_head(&id, &body).await;
                        link.send_message(Msg::WriteFinished { id, result });
                    });
                }
                Err(e) => toast_error(&e.to_string()),
            }
            true
        }
        Msg::FeedbackInput { id, text } => {
            page.table.set_feedback_draft(&id, text);
            true
        }
        Msg::SubmitFeedback(id) => {
            if !props.session.actions().decide_status {
                return false;
            }
            let request = page.table.submit_feedback(&id);
            send_decision(ctx, id, request)
        }
        Msg::Decide { id, approve } => {
            if !props.session.actions().decide_status {
                return false;
            }
            let request = page.table.request_decision(&id, approve);
            send_decision(ctx, id, request)
        }
        Msg::WriteFinished { id, result } => {
            if let Err(e) = &result {
                error!(format!("Error updating application {}: {}", id, e));
            }
            show_notice(&page.table.complete(&id, result));
            true
        }
        Msg::ShowDocuments(id) => {
            page.documents_for = Some(id);
            open_top_sheet(&page.document_dialog_ref);
            true
        }
        Msg::CloseDocuments => {
            close_top_sheet(&page.document_dialog_ref);
            page.documents_for = None;
            true
        }
    }
}

fn send_decision(
    ctx: &Context<ApplicationsPage>,
    id: String,
    request: Result<common::requests::PrincipalApproval, common::error::ValidationError>,
) -> bool {
    match request {
        Ok(body) => {
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.approve_principal(&id, &body).await;
                link.send_message(Msg::WriteFinished { id, result });
            });
        }
        Err(e) => toast_error(&e.to_string()),
    }
    true
}
