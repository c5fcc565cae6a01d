use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Full-screen overlay that slides in from the top. Used for the document
/// viewer and the notification composer.
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

const SHOWN: &str = "show";

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        sheet.class_list().add_1(SHOWN).ok();
    }
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        sheet.class_list().remove_1(SHOWN).ok();
    }
}
