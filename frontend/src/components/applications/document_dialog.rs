use yew::html::Scope;
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

use super::messages::Msg;
use super::state::ApplicationsPage;

/// Top sheet listing the three uploaded documents of one application.
pub fn document_dialog(page: &ApplicationsPage, link: &Scope<ApplicationsPage>) -> Html {
    let selected = page
        .documents_for
        .as_deref()
        .and_then(|id| page.table.cache().get(id));

    html! {
        <YwMaterialTopSheet node_ref={page.document_dialog_ref.clone()}>
            <div class="sheet-backdrop">
                <button class="sheet-close" onclick={link.callback(|_| Msg::CloseDocuments)}>
                    { "✕" }
                </button>
                {
                    match selected {
                        Some(app) => html! {
                            <div class="documents">
                                <h2>{ format!("Documents of {}", app.name) }</h2>
                                {
                                    for app.documents().into_iter().map(|(label, url)| html! {
                                        <figure class="document">
                                            <img src={url.to_string()} alt={label} />
                                            <figcaption>
                                                { label }
                                                { " " }
                                                <a href={url.to_string()} target="_blank" rel="noopener noreferrer">
                                                    { "Open" }
                                                </a>
                                            </figcaption>
                                        </figure>
                                    })
                                }
                            </div>
                        },
                        None => html! { <span class="muted">{ "No application selected" }</span> },
                    }
                }
            </div>
        </YwMaterialTopSheet>
    }
}
