use common::routing::Role;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoleSelectProps {
    pub current: Option<Role>,
    /// `None` drops the stored claim and returns to the student view.
    pub on_select: Callback<Option<Role>>,
}

pub enum Msg {
    Choose(Option<Role>),
}

/// `/admin`: picks the role claim stored in the profile.
pub struct RoleSelect;

impl Component for RoleSelect {
    type Message = Msg;
    type Properties = RoleSelectProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Choose(role) => ctx.props().on_select.emit(role),
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = ctx.props().current;
        html! {
            <section class="role-select">
                <h2>{ "Please Select Role" }</h2>
                <div class="role-buttons">
                    {
                        for Role::ALL.iter().map(|&role| {
                            let selected = current == Some(role);
                            html! {
                                <button
                                    class={classes!("outline-btn", selected.then_some("selected"))}
                                    onclick={ctx.link().callback(move |_: MouseEvent| Msg::Choose(Some(role)))}
                                >
                                    { format!("Login as {}", role.title()) }
                                </button>
                            }
                        })
                    }
                    <button
                        class={classes!("outline-btn", current.is_none().then_some("selected"))}
                        onclick={ctx.link().callback(|_: MouseEvent| Msg::Choose(None))}
                    >
                        { "Continue as Student" }
                    </button>
                </div>
            </section>
        }
    }
}
