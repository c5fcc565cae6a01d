pub mod applications;
pub mod funds;
pub mod hero;
pub mod navbar;
pub mod not_found;
pub mod notifications;
pub mod role_select;
pub mod status_browser;
pub mod student;

use common::routing::Route;
use yew::prelude::*;

/// Anchor that navigates in-app instead of reloading the page.
pub fn route_link(label: &str, route: Route, class: &'static str, navigate: &Callback<Route>) -> Html {
    let navigate = navigate.clone();
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigate.emit(route);
    });
    html! {
        <a class={class} href={route.path()} {onclick}>{ label.to_string() }</a>
    }
}

/// The browser's current UTC offset, used for every displayed timestamp.
pub fn viewer_offset() -> chrono::FixedOffset {
    let minutes = js_sys::Date::new_0().get_timezone_offset();
    common::display::offset_from_js_minutes(minutes as i32)
}

/// "Yes"/"No" cell for an approval flag.
pub fn verified_cell(flag: bool) -> Html {
    html! {
        <span class={classes!("flag", if flag { "flag-yes" } else { "flag-no" })}>
            { if flag { "Yes" } else { "No" } }
        </span>
    }
}
