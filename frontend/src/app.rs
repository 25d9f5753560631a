mod greeting_form;

use yew::prelude::*;

pub(crate) struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <greeting_form::GreetingForm/>
        }
    }
}
