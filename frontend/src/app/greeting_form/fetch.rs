use super::{GreetingForm, Msg};

const BACKEND_URL: &'static str = "http://localhost:3000";

const SERVER_ERROR_FALLBACK: &str = "Ошибка";
const UNREACHABLE_FALLBACK: &str = "Сервер недоступен";

#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
    Message(String),
    Error(String),
}

pub(crate) fn greet(ctx: &yew::Context<GreetingForm>, name: String, seq: u64) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = match reqwasm::http::Request::get(&greet_url(&name)).send().await {
            Ok(response) => {
                let ok = response.ok();
                match response.text().await {
                    Ok(body) => interpret(ok, &body),
                    Err(_) => Outcome::Error(UNREACHABLE_FALLBACK.to_string()),
                }
            }
            Err(_) => Outcome::Error(UNREACHABLE_FALLBACK.to_string()),
        };
        link.send_message(Msg::Finished { seq, outcome });
    });
}

fn greet_url(name: &str) -> String {
    format!("{BACKEND_URL}/hello/{}", urlencoding::encode(name))
}

fn interpret(ok: bool, body: &str) -> Outcome {
    if ok {
        match serde_json::from_str::<common::Greeting>(body) {
            Ok(greeting) => Outcome::Message(greeting.message),
            // A success status with an unreadable body is treated like an
            // unreachable server, same as a rejected request.
            Err(_) => Outcome::Error(UNREACHABLE_FALLBACK.to_string()),
        }
    } else {
        let error = serde_json::from_str::<common::ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
        Outcome::Error(error)
    }
}
