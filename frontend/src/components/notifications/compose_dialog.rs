use common::requests::Audience;
use common::routing::Role;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

use super::{Msg, NotificationsPage};

/// Top sheet with the post form. The audience picker is shown to the roles
/// that may address students; finance heads always post to admins.
pub fn compose_dialog(page: &NotificationsPage, ctx: &Context<NotificationsPage>) -> Html {
    let link = ctx.link();
    let choose_audience = ctx.props().session.actions().choose_audience;
    let posting = page.feed.is_posting();
    let on_audience = link.batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Audience::ALL
            .into_iter()
            .find(|a| a.label() == select.value())
            .map(Msg::SetAudience)
    });

    html! {
        <YwMaterialTopSheet node_ref={page.compose_ref.clone()}>
            <div class="sheet-backdrop">
                <form
                    class="compose"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Post
                    })}
                >
                    <h2>{ "Post Notification" }</h2>
                    <input
                        type="text"
                        placeholder="Title"
                        value={page.title.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetTitle(input.value())
                        })}
                    />
                    <textarea
                        placeholder="Message"
                        rows="5"
                        value={page.message.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::SetMessage(input.value())
                        })}
                    />
                    if choose_audience {
                        <select onchange={on_audience}>
                            {
                                for Audience::ALL.iter().map(|a| html! {
                                    <option value={a.label()} selected={*a == page.audience}>
                                        { a.label() }
                                    </option>
                                })
                            }
                        </select>
                    } else if page.feed.viewer() == Some(Role::FinanceHead) {
                        <p class="muted">{ "Visible to admins." }</p>
                    }
                    <div class="compose-actions">
                        <button
                            type="button"
                            class="small-btn"
                            onclick={link.callback(|_| Msg::CloseCompose)}
                        >
                            { "Cancel" }
                        </button>
                        <button type="submit" class="small-btn approve" disabled={posting}>
                            { if posting { "Posting..." } else { "Post" } }
                        </button>
                    </div>
                </form>
            </div>
        </YwMaterialTopSheet>
    }
}
