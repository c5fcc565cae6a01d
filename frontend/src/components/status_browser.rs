//! "View All Applicants": read-only listing by status tab.
//!
//! Switching tabs quickly can leave several fetches in flight; only the answer
//! to the latest one is applied.

use chrono::FixedOffset;
use common::display::format_date;
use common::error::ClientError;
use common::generation::{RequestGeneration, Ticket};
use common::model::application::{Application, StatusFilter};
use common::table::TableQuery;
use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{verified_cell, viewer_offset};

#[derive(Properties, PartialEq)]
pub struct StatusBrowserProps {
    pub api: ApiClient,
}

pub enum Msg {
    SelectTab(StatusFilter),
    Loaded(Ticket, Result<Vec<Application>, ClientError>),
    SetSearch(String),
    SetPage(usize),
}

pub struct StatusBrowser {
    tab: StatusFilter,
    rows: Vec<Application>,
    query: TableQuery,
    loading: bool,
    failed: bool,
    generation: RequestGeneration,
    offset: FixedOffset,
}

impl StatusBrowser {
    fn fetch(&mut self, ctx: &Context<Self>) {
        let ticket = self.generation.begin();
        self.loading = true;
        let api = ctx.props().api.clone();
        let tab = self.tab;
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api.scholarships(tab).await;
            link.send_message(Msg::Loaded(ticket, result));
        });
    }
}

impl Component for StatusBrowser {
    type Message = Msg;
    type Properties = StatusBrowserProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut browser = Self {
            tab: StatusFilter::Accepted,
            rows: Vec::new(),
            query: TableQuery::default(),
            loading: false,
            failed: false,
            generation: RequestGeneration::new(),
            offset: viewer_offset(),
        };
        browser.fetch(ctx);
        browser
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectTab(tab) => {
                if tab == self.tab {
                    return false;
                }
                self.tab = tab;
                self.rows.clear();
                self.query.set_page(1);
                self.fetch(ctx);
                true
            }
            Msg::Loaded(ticket, result) => {
                if !self.generation.is_current(ticket) {
                    return false;
                }
                self.loading = false;
                match result {
                    Ok(rows) => {
                        self.failed = false;
                        self.rows = rows;
                    }
                    Err(e) => {
                        error!(format!("Error fetching {} scholarships: {}", self.tab.slug(), e));
                        self.failed = true;
                    }
                }
                true
            }
            Msg::SetSearch(search) => {
                self.query.set_search(search);
                true
            }
            Msg::SetPage(page) => {
                self.query.set_page(page);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visible = self.query.visible(&self.rows);
        let filtered = self.query.filtered(&self.rows).len();
        let (first, _) = self.query.bounds(filtered);
        let pages = self.query.page_count(filtered);
        let current = self.query.page();

        html! {
            <section class="status-browser">
                <h1 class="page-title">{ "All Applicants" }</h1>
                <div class="tab-bar">
                    {
                        for StatusFilter::ALL.iter().map(|&tab| html! {
                            <button
                                class={classes!("tab-btn", (tab == self.tab).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SelectTab(tab))}
                            >
                                { tab.title() }
                            </button>
                        })
                    }
                </div>
                <input
                    class="search"
                    type="text"
                    placeholder="Search..."
                    value={self.query.search().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetSearch(input.value())
                    })}
                />
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "#" }</th>
                            <th>{ "Name" }</th>
                            <th>{ "Roll No" }</th>
                            <th>{ "Branch" }</th>
                            <th>{ "HOD" }</th>
                            <th>{ "Principal" }</th>
                            <th>{ "Finance Head" }</th>
                            <th>{ "Applied On" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        if self.loading && visible.is_empty() {
                            <tr><td class="empty" colspan="8">{ "Loading..." }</td></tr>
                        } else if self.failed {
                            <tr><td class="empty" colspan="8">{ "Failed to load applications." }</td></tr>
                        } else if visible.is_empty() {
                            <tr><td class="empty" colspan="8">{ "No applications found." }</td></tr>
                        } else {
                            { for visible.iter().enumerate().map(|(i, app)| html! {
                                <tr key={app.id.clone()}>
                                    <td>{ first + i + 1 }</td>
                                    <td>{ app.name.clone() }</td>
                                    <td>{ app.roll_no.clone() }</td>
                                    <td>{ app.branch.clone() }</td>
                                    <td>{ verified_cell(app.approved_by_hod) }</td>
                                    <td>{ verified_cell(app.approved_by_principal) }</td>
                                    <td>{ verified_cell(app.approved_by_finance_head) }</td>
                                    <td>{ format_date(&app.created_at, self.offset) }</td>
                                </tr>
                            }) }
                        }
                    </tbody>
                </table>
                <div class="pagination">
                    <div class="pages">
                        {
                            for (1..=pages).map(|number| html! {
                                <button
                                    class={classes!((number == current).then_some("active"))}
                                    onclick={link.callback(move |_| Msg::SetPage(number))}
                                >
                                    { number }
                                </button>
                            })
                        }
                    </div>
                </div>
            </section>
        }
    }
}
