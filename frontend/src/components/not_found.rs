use common::routing::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub navigate: Callback<Route>,
}

pub struct NotFound;

impl Component for NotFound {
    type Message = ();
    type Properties = NotFoundProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, _msg: Self::Message) -> bool {
        ctx.props().navigate.emit(Route::Home);
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="not-found">
                <h2>{ "Page not found" }</h2>
                <button class="outline-btn" onclick={ctx.link().callback(|_: MouseEvent| ())}>
                    { "Back to home" }
                </button>
            </section>
        }
    }
}
