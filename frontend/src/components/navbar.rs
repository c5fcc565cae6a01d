use common::routing::Route;
use common::session::Session;
use yew::prelude::*;

use super::route_link;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub session: Session,
    pub current: Route,
    pub navigate: Callback<Route>,
}

pub enum Msg {
    ToggleMenu,
    Go(Route),
}

/// Top bar with the brand and the links of the viewer's role.
pub struct Navbar {
    open: bool,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { open: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.open = !self.open;
                true
            }
            Msg::Go(route) => {
                self.open = false;
                ctx.props().navigate.emit(route);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let go = ctx.link().callback(Msg::Go);
        let role_label = props
            .session
            .role()
            .map(|role| role.title())
            .unwrap_or("Student");

        html! {
            <nav class="navbar">
                <div class="navbar-head">
                    { route_link("Scloro!", Route::Home, "brand", &go) }
                    <button
                        class="menu-toggle"
                        aria-label="toggle menu"
                        onclick={ctx.link().callback(|_| Msg::ToggleMenu)}
                    >
                        <span class="material-icons">{ if self.open { "close" } else { "menu" } }</span>
                    </button>
                </div>
                <div class={classes!("navbar-links", self.open.then_some("open"))}>
                    {
                        for props.session.nav_links().iter().map(|link| {
                            let class = if link.route == props.current { "nav-link active" } else { "nav-link" };
                            route_link(link.label, link.route, class, &go)
                        })
                    }
                </div>
                <div class="navbar-profile">
                    <span class="role-badge">{ role_label }</span>
                    { route_link("Switch role", Route::RoleSelection, "nav-link", &go) }
                </div>
            </nav>
        }
    }
}
