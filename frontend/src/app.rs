//! Application shell: loads the runtime config and the identity profile, keeps
//! the current route in sync with the address bar and dispatches to the page
//! the session is allowed to see.

use common::config::ClientConfig;
use common::routing::{Role, Route};
use common::session::Session;
use gloo_console::log;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::applications::{ApplicationsPage, TableMode};
use crate::components::funds::FundsPage;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::not_found::NotFound;
use crate::components::notifications::NotificationsPage;
use crate::components::role_select::RoleSelect;
use crate::components::status_browser::StatusBrowser;
use crate::components::student::tracking::TrackingPage;
use crate::components::student::upload::UploadPage;
use crate::config::load_client_config;
use crate::identity;
use crate::toast::toast_success;

pub enum Msg {
    ConfigLoaded(ClientConfig),
    Navigate(Route),
    LocationChanged,
    SelectRole(Option<Role>),
}

pub struct App {
    session: Session,
    api: Option<ApiClient>,
    route: Route,
    popstate: Option<Closure<dyn Fn(web_sys::PopStateEvent)>>,
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .ok();
    }
}

fn replace_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .ok();
    }
}

impl App {
    /// Resolves `requested` against the session and keeps the address bar on
    /// the route actually shown.
    fn show(&mut self, requested: Route, push: bool) -> bool {
        let target = self.session.resolve(requested);
        if target != requested && requested != Route::NotFound {
            log!(format!("{} redirected to {}", requested.path(), target.path()));
        }
        if target != Route::NotFound && current_path() != target.path() {
            if push {
                push_path(target.path());
            } else {
                replace_path(target.path());
            }
        }
        let changed = self.route != target;
        self.route = target;
        changed
    }

    fn page(&self, ctx: &Context<Self>, api: &ApiClient) -> Html {
        let session = self.session.clone();
        let api = api.clone();
        let navigate = ctx.link().callback(Msg::Navigate);
        let key = self.route.path();
        match self.route {
            Route::Home => html! { <Hero {navigate} /> },
            Route::RoleSelection => html! {
                <RoleSelect current={session.role()} on_select={ctx.link().callback(Msg::SelectRole)} />
            },
            Route::FinanceHeadDashboard => html! {
                <ApplicationsPage key={key} {api} {session} mode={TableMode::Sanction} />
            },
            Route::PrincipalDashboard => html! {
                <ApplicationsPage key={key} {api} {session} mode={TableMode::Review} />
            },
            Route::HodDashboard => html! {
                <ApplicationsPage key={key} {api} {session} mode={TableMode::Browse} />
            },
            Route::FinanceHeadListAll | Route::PrincipalListAll => html! {
                <StatusBrowser key={key} {api} />
            },
            Route::FinanceHeadFunds | Route::PrincipalFunds => html! {
                <FundsPage key={key} {api} />
            },
            Route::FinanceHeadNotifications
            | Route::PrincipalNotifications
            | Route::HodNotifications
            | Route::StudentNotifications => html! {
                <NotificationsPage key={key} {api} {session} />
            },
            Route::StudentUpload => html! {
                <UploadPage {api} {session} {navigate} />
            },
            Route::StudentTracking => html! { <TrackingPage {api} /> },
            Route::NotFound => html! { <NotFound {navigate} /> },
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(load_client_config().await));
        });

        let link = ctx.link().clone();
        let popstate = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |_| {
            link.send_message(Msg::LocationChanged);
        });
        let popstate = web_sys::window().and_then(|window| {
            window
                .add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                .ok()
                .map(|_| popstate)
        });

        let mut app = Self {
            session: identity::load_session(),
            api: None,
            route: Route::Home,
            popstate,
        };
        app.show(Route::from_path(&current_path()), false);
        app
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.api = Some(ApiClient::new(&config));
                true
            }
            Msg::Navigate(route) => self.show(route, true),
            Msg::LocationChanged => self.show(Route::from_path(&current_path()), false),
            Msg::SelectRole(Some(role)) => {
                if self.session.set_role(role) {
                    identity::store_role(&self.session, Some(role));
                    log!(format!("Role set to {}", role));
                }
                toast_success(&format!("Signed in as {}.", role.title()));
                self.show(self.session.home(), true);
                true
            }
            Msg::SelectRole(None) => {
                if self.session.clear_role() {
                    identity::store_role(&self.session, None);
                    log!("Role cleared");
                }
                toast_success("Continuing as Student.");
                self.show(self.session.home(), true);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-layout">
                <Navbar
                    session={self.session.clone()}
                    current={self.route}
                    navigate={ctx.link().callback(Msg::Navigate)}
                />
                <main class="page">
                    {
                        match &self.api {
                            Some(api) => self.page(ctx, api),
                            None => html! { <p class="loading">{ "Loading..." }</p> },
                        }
                    }
                </main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(popstate)) = (web_sys::window(), self.popstate.take()) {
            window
                .remove_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                .ok();
        }
    }
}
