mod fetch;

use yew::prelude::*;

const HEADING: &str = "Поздороваться";
const NAME_LABEL: &str = "Имя:";
const BUTTON_LABEL: &str = "Поздороваться";

pub(crate) struct GreetingForm {
    state: FormState,
}

pub(crate) enum Msg {
    NameChanged(String),
    Submit,
    Finished { seq: u64, outcome: fetch::Outcome },
}

/// Display state of the form. Each submission gets a fresh sequence number;
/// a resolution carrying a stale number must not touch the display.
#[derive(Default)]
struct FormState {
    name: String,
    result: String,
    error: String,
    seq: u64,
}

impl FormState {
    fn begin_submit(&mut self) -> u64 {
        self.result.clear();
        self.error.clear();
        self.seq += 1;
        self.seq
    }

    fn finish(&mut self, seq: u64, outcome: fetch::Outcome) -> bool {
        if seq != self.seq {
            return false;
        }
        match outcome {
            fetch::Outcome::Message(message) => self.result = message,
            fetch::Outcome::Error(error) => self.error = error,
        }
        true
    }
}

impl Component for GreetingForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: FormState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::NameChanged(name) => {
                self.state.name = name;
                true
            }
            Msg::Submit => {
                let seq = self.state.begin_submit();
                fetch::greet(ctx, self.state.name.clone(), seq);
                true
            }
            Msg::Finished { seq, outcome } => self.state.finish(seq, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div>
                <h1>{ HEADING }</h1>
                <label for="name">{ NAME_LABEL }</label>
                <input id="name" value={self.state.name.clone()} oninput={link.callback(|ev: InputEvent| Msg::NameChanged(
                    ev
                        .target_dyn_into::<web_sys::HtmlInputElement>()
                        .map(|h| h.value())
                        .unwrap_or(String::new())
                ))}/>
                <button onclick={link.callback(|_| Msg::Submit)}>{ BUTTON_LABEL }</button>
                { if !self.state.result.is_empty() {
                    html!(<div role="status">{ &self.state.result }</div>)
                } else {
                    html!()
                }}
                { if !self.state.error.is_empty() {
                    html!(<div role="alert">{ &self.state.error }</div>)
                } else {
                    html!()
                }}
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fetch::Outcome;
    use super::FormState;

    #[test]
    fn submit_clears_previous_outcome() {
        let mut state = FormState::default();
        let seq = state.begin_submit();
        state.finish(seq, Outcome::Error(String::from("name missing")));
        assert_eq!(state.error, "name missing");

        state.begin_submit();
        assert!(state.result.is_empty());
        assert!(state.error.is_empty());
    }

    #[test]
    fn success_sets_result_only() {
        let mut state = FormState::default();
        let seq = state.begin_submit();
        assert!(state.finish(seq, Outcome::Message(String::from("Hello, Анна"))));
        assert_eq!(state.result, "Hello, Анна");
        assert!(state.error.is_empty());
    }

    #[test]
    fn failure_sets_error_only() {
        let mut state = FormState::default();
        let seq = state.begin_submit();
        assert!(state.finish(seq, Outcome::Error(String::from("Сервер недоступен"))));
        assert_eq!(state.error, "Сервер недоступен");
        assert!(state.result.is_empty());
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut state = FormState::default();
        let first = state.begin_submit();
        let second = state.begin_submit();

        assert!(state.finish(second, Outcome::Message(String::from("Hello, Анна"))));
        assert!(!state.finish(first, Outcome::Message(String::from("Hello, Boris"))));
        assert_eq!(state.result, "Hello, Анна");
    }

    #[test]
    fn latest_submission_wins_regardless_of_resolution_order() {
        let mut state = FormState::default();
        let first = state.begin_submit();
        let second = state.begin_submit();

        // The older request resolves first; the newer one still decides the display.
        assert!(!state.finish(first, Outcome::Error(String::from("Ошибка"))));
        assert!(state.finish(second, Outcome::Message(String::from("Hello, Анна"))));
        assert_eq!(state.result, "Hello, Анна");
        assert!(state.error.is_empty());
    }
}
