//! Table rendering for the application dashboards.

use common::display::{format_rupees, format_timestamp};
use common::model::application::{Application, ApplicationStatus};
use common::table::PageSize;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::verified_cell;

use super::document_dialog::document_dialog;
use super::messages::Msg;
use super::props::TableMode;
use super::state::ApplicationsPage;

pub fn view(page: &ApplicationsPage, ctx: &Context<ApplicationsPage>) -> Html {
    let link = ctx.link();
    let mode = ctx.props().mode;

    html! {
        <section class="applications">
            <h1 class="page-title">{ mode.title() }</h1>
            { build_controls(page, link) }
            <div class="table-wrap">
                <table class="data-table">
                    <thead>{ build_header(mode) }</thead>
                    <tbody>{ build_rows(page, link, mode) }</tbody>
                </table>
            </div>
            { build_pagination(page, link) }
            { document_dialog(page, link) }
        </section>
    }
}

fn build_controls(page: &ApplicationsPage, link: &Scope<ApplicationsPage>) -> Html {
    let query = page.table.query();
    let on_size = link.batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select
            .value()
            .parse::<usize>()
            .ok()
            .and_then(|rows| PageSize::try_from(rows).ok())
            .map(Msg::SetPageSize)
    });
    let on_search = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetSearch(input.value())
    });

    html! {
        <div class="table-controls">
            <label>
                { "Show " }
                <select onchange={on_size}>
                    {
                        for PageSize::ALL.iter().map(|size| html! {
                            <option
                                value={size.rows().to_string()}
                                selected={*size == query.page_size()}
                            >
                                { size.rows() }
                            </option>
                        })
                    }
                </select>
                { " entries" }
            </label>
            <input
                class="search"
                type="text"
                placeholder="Search..."
                value={query.search().to_string()}
                oninput={on_search}
            />
            if page.table.is_loading() {
                <span class="loading-indicator">{ "Refreshing..." }</span>
            }
        </div>
    }
}

fn build_header(mode: TableMode) -> Html {
    let columns: &[&str] = match mode {
        TableMode::Sanction => &[
            "#", "Name", "Roll No", "Branch", "Documents", "HOD Verified",
            "Principal Verified", "Amount Sanction", "Status", "Created At",
        ],
        TableMode::Review => &[
            "#", "Name", "Roll No", "Branch", "Documents", "HOD Verified",
            "Principal Feedback", "Status", "Created At",
        ],
        TableMode::Browse => &[
            "#", "Name", "Roll No", "Branch", "Documents", "HOD Verified",
            "Principal Verified", "Finance Verified", "Status", "Created At",
        ],
    };
    html! {
        <tr>{ for columns.iter().map(|c| html! { <th>{ *c }</th> }) }</tr>
    }
}

fn build_rows(page: &ApplicationsPage, link: &Scope<ApplicationsPage>, mode: TableMode) -> Html {
    let rows = page.table.visible_rows();
    if rows.is_empty() {
        let message = if page.table.is_loading() {
            "Loading..."
        } else {
            "No applications found."
        };
        return html! {
            <tr><td class="empty" colspan="10">{ message }</td></tr>
        };
    }
    let first = page.table.first_index();
    html! {
        <>{ for rows.into_iter().enumerate().map(|(i, app)| build_row(page, link, mode, first + i + 1, app)) }</>
    }
}

fn build_row(
    page: &ApplicationsPage,
    link: &Scope<ApplicationsPage>,
    mode: TableMode,
    number: usize,
    app: &Application,
) -> Html {
    let pending = page.table.cache().is_pending(&app.id);
    let show_docs = {
        let id = app.id.clone();
        link.callback(move |_| Msg::ShowDocuments(id.clone()))
    };

    html! {
        <tr key={app.id.clone()} class={classes!(pending.then_some("row-pending"))}>
            <td>{ number }</td>
            <td>{ app.name.clone() }</td>
            <td>{ app.roll_no.clone() }</td>
            <td>{ app.branch.clone() }</td>
            <td><button class="link-btn" onclick={show_docs}>{ "View" }</button></td>
            <td>{ verified_cell(app.approved_by_hod) }</td>
            {
                match mode {
                    TableMode::Sanction => html! {
                        <>
                            <td>{ verified_cell(app.approved_by_principal) }</td>
                            <td>{ sanction_cell(page, link, app, pending) }</td>
                        </>
                    },
                    TableMode::Review => html! {
                        <td>{ feedback_cell(page, link, app, pending) }</td>
                    },
                    TableMode::Browse => html! {
                        <>
                            <td>{ verified_cell(app.approved_by_principal) }</td>
                            <td>{ verified_cell(app.approved_by_finance_head) }</td>
                        </>
                    },
                }
            }
            <td>
                { status_badge(app.status) }
                if mode == TableMode::Review {
                    { decision_buttons(link, app, pending) }
                }
            </td>
            <td>{ format_timestamp(&app.created_at, page.offset) }</td>
        </tr>
    }
}

fn status_badge(status: ApplicationStatus) -> Html {
    html! {
        <span class={classes!("status", format!("status-{}", status.as_str()))}>
            { status.label() }
        </span>
    }
}

fn sanction_cell(
    page: &ApplicationsPage,
    link: &Scope<ApplicationsPage>,
    app: &Application,
    pending: bool,
) -> Html {
    if let Some(amount) = app.amount_sanction {
        return html! { <span class="amount">{ format_rupees(amount) }</span> };
    }
    let on_input = {
        let id = app.id.clone();
        link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::AmountInput {
                id: id.clone(),
                raw: input.value(),
            }
        })
    };
    let on_sanction = {
        let id = app.id.clone();
        link.callback(move |_| Msg::Sanction(id.clone()))
    };
    html! {
        <div class="inline-edit">
            <input
                type="number"
                min="0"
                placeholder="Enter Amount"
                value={page.table.amount_draft(&app.id).to_string()}
                oninput={on_input}
                disabled={pending}
            />
            <button class="small-btn" onclick={on_sanction} disabled={pending}>
                { if pending { "Saving..." } else { "Sanction" } }
            </button>
        </div>
    }
}

fn feedback_cell(
    page: &ApplicationsPage,
    link: &Scope<ApplicationsPage>,
    app: &Application,
    pending: bool,
) -> Html {
    let on_input = {
        let id = app.id.clone();
        link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FeedbackInput {
                id: id.clone(),
                text: input.value(),
            }
        })
    };
    let on_submit = {
        let id = app.id.clone();
        link.callback(move |_| Msg::SubmitFeedback(id.clone()))
    };
    html! {
        <div class="inline-edit">
            <input
                type="text"
                placeholder="Feedback"
                value={page.table.feedback_value(&app.id)}
                oninput={on_input}
                disabled={pending}
            />
            <button class="small-btn" onclick={on_submit} disabled={pending}>{ "Submit" }</button>
        </div>
    }
}

fn decision_buttons(link: &Scope<ApplicationsPage>, app: &Application, pending: bool) -> Html {
    let decide = |approve: bool| {
        let id = app.id.clone();
        link.callback(move |_| Msg::Decide {
            id: id.clone(),
            approve,
        })
    };
    html! {
        <div class="decision">
            <span class="menu-label">{ "Update Status" }</span>
            <button
                class="small-btn approve"
                onclick={decide(true)}
                disabled={pending || app.status == ApplicationStatus::Approved}
            >
                { "Approve" }
            </button>
            <button
                class="small-btn reject"
                onclick={decide(false)}
                disabled={pending || app.status == ApplicationStatus::Rejected}
            >
                { "Reject" }
            </button>
        </div>
    }
}

fn build_pagination(page: &ApplicationsPage, link: &Scope<ApplicationsPage>) -> Html {
    let summary = page.table.summary();
    let current = page.table.query().page();
    let pages = page.table.page_count();
    let go = |number: usize| link.callback(move |_| Msg::SetPage(number));

    html! {
        <div class="pagination">
            <span class="summary">
                { format!("Showing {} to {} of {} entries", summary.first, summary.last, summary.total) }
            </span>
            <div class="pages">
                <button onclick={go(current.saturating_sub(1).max(1))} disabled={current <= 1}>
                    { "Previous" }
                </button>
                {
                    for (1..=pages).map(|number| html! {
                        <button
                            class={classes!((number == current).then_some("active"))}
                            onclick={go(number)}
                        >
                            { number }
                        </button>
                    })
                }
                <button onclick={go(current + 1)} disabled={current >= pages}>
                    { "Next" }
                </button>
            </div>
        </div>
    }
}
