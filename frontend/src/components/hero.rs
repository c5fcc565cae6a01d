use common::routing::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub navigate: Callback<Route>,
}

/// Student landing page.
pub struct Hero;

impl Component for Hero {
    type Message = Route;
    type Properties = HeroProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, route: Self::Message) -> bool {
        ctx.props().navigate.emit(route);
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let upload = ctx.link().callback(|_: MouseEvent| Route::StudentUpload);
        let track = ctx.link().callback(|_: MouseEvent| Route::StudentTracking);

        html! {
            <section class="hero">
                <h1><span class="light">{ "Welcome," }</span>{ " " }<span class="accent">{ "Student" }</span></h1>
                <p class="subtitle">{ "Please upload documents to avail for scholarship." }</p>
                <div class="hero-actions">
                    <button class="outline-btn" onclick={upload}>{ "Upload Documents" }</button>
                    <button class="outline-btn" onclick={track}>{ "Track Status" }</button>
                </div>
            </section>
        }
    }
}
