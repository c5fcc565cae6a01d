//! Short-lived toast shown at the bottom of the screen.
//!
//! Every mutation ends here: views turn a `Notice` from `common` into a toast
//! instead of rendering their own banners.

use common::display::{Notice, NoticeKind};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MILLIS: u32 = 3000;

pub fn show_notice(notice: &Notice) {
    let background = match notice.kind {
        NoticeKind::Success => "rgba(46, 125, 50, 0.92)",
        NoticeKind::Error => "rgba(198, 40, 40, 0.92)",
    };
    show_toast(&notice.message, background);
}

pub fn toast_error(message: &str) {
    show_notice(&Notice::error(message));
}

pub fn toast_success(message: &str) {
    show_notice(&Notice::success(message));
}

fn show_toast(message: &str, background: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    // Server messages end up here, so never as markup.
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
