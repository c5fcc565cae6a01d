use common::display::format_rupees;
use common::error::ClientError;
use common::model::funds::FundsSummary;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::card_grid::CardGrid;

#[derive(Properties, PartialEq)]
pub struct FundsProps {
    pub api: ApiClient,
}

pub enum Msg {
    Loaded(Result<FundsSummary, ClientError>),
}

enum Funds {
    Loading,
    Ready(FundsSummary),
    Failed,
}

/// Disbursement totals for the finance head and the principal.
pub struct FundsPage {
    funds: Funds,
}

impl Component for FundsPage {
    type Message = Msg;
    type Properties = FundsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(api.amount_details().await));
        });
        Self {
            funds: Funds::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(summary)) => self.funds = Funds::Ready(summary),
            Msg::Loaded(Err(e)) => {
                error!(format!("Error fetching funds data: {}", e));
                self.funds = Funds::Failed;
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match &self.funds {
            Funds::Loading => html! { <p class="loading">{ "Loading..." }</p> },
            Funds::Failed => html! { <p class="error">{ "Failed to load funds data" }</p> },
            Funds::Ready(summary) => html! {
                <CardGrid columns={2}>
                    {
                        for summary.cards().into_iter().map(|(title, amount)| html! {
                            <div class="fund-card">
                                <h3>{ title }</h3>
                                <p class="amount">{ format_rupees(amount) }</p>
                            </div>
                        })
                    }
                </CardGrid>
            },
        };
        html! {
            <section class="funds">
                <h1 class="page-title">{ "Funds Overview" }</h1>
                { body }
            </section>
        }
    }
}
