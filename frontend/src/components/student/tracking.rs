use common::display::format_rupees;
use common::error::ClientError;
use common::model::application::ScholarshipStatus;
use common::workflow::ApprovalProgress;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::identity::stored_application_id;

#[derive(Properties, PartialEq)]
pub struct TrackingProps {
    pub api: ApiClient,
}

pub enum Msg {
    Loaded(Result<ScholarshipStatus, ClientError>),
}

enum Tracking {
    NoApplication,
    Loading,
    Ready(ApprovalProgress),
    Failed,
}

/// Four-step progress of the stored application.
pub struct TrackingPage {
    tracking: Tracking,
}

impl Component for TrackingPage {
    type Message = Msg;
    type Properties = TrackingProps;

    fn create(ctx: &Context<Self>) -> Self {
        let Some(application_id) = stored_application_id() else {
            return Self {
                tracking: Tracking::NoApplication,
            };
        };
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(api.tracking_status(&application_id).await));
        });
        Self {
            tracking: Tracking::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(status)) => {
                self.tracking = Tracking::Ready(ApprovalProgress::from(&status));
            }
            Msg::Loaded(Err(e)) => {
                error!(format!("Error fetching tracking status: {}", e));
                self.tracking = Tracking::Failed;
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match &self.tracking {
            Tracking::NoApplication => html! {
                <p class="muted">{ "No application found. Apply for a scholarship first." }</p>
            },
            Tracking::Loading => html! { <p class="loading">{ "Loading..." }</p> },
            Tracking::Failed => html! { <p class="error">{ "Failed to load tracking status." }</p> },
            Tracking::Ready(progress) => progress_view(progress),
        };
        html! {
            <section class="tracking">
                <h1 class="page-title">{ "Scholarship Tracking" }</h1>
                { body }
            </section>
        }
    }
}

fn progress_view(progress: &ApprovalProgress) -> Html {
    let steps = progress.steps();
    html! {
        <>
            <ol class="steps">
                {
                    for steps.iter().enumerate().map(|(index, step)| html! {
                        <>
                            <li class={classes!("step", step.completed.then_some("done"))}>
                                <span class="step-dot">{ index + 1 }</span>
                                <span class="step-label">{ step.stage.label() }</span>
                            </li>
                            if index + 1 < steps.len() {
                                <li
                                    class={classes!("connector", progress.connector_highlighted(index).then_some("done"))}
                                    aria-hidden="true"
                                />
                            }
                        </>
                    })
                }
            </ol>
            <p class="muted">{ format!("{} of {} steps completed", progress.completed_count(), steps.len()) }</p>
            if let Some(amount) = progress.sanctioned_amount() {
                <div class="sanctioned">
                    { "Amount Sanctioned: " }
                    <strong>{ format_rupees(amount) }</strong>
                </div>
            }
        </>
    }
}
