/// Home view: URL entry, clipboard paste and submission

use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::client::js_error_message;
use crate::api::{resolve_target, ApiClient};
use crate::detectors::classify;
use crate::route::View;
use crate::ui::components::ClassificationBadge;

// Import JS bridge functions
#[wasm_bindgen(module = "/app.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn readClipboard() -> Result<JsValue, JsValue>;
}

#[derive(Clone, PartialEq)]
enum HomeState {
    Idle,
    Loading,
    Error(String),
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub client: ApiClient,
    pub on_navigate: Callback<View>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let link = use_state(String::new);
    let state = use_state(|| HomeState::Idle);

    let on_input = {
        let link = link.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                link.set(input.value());
            }
        })
    };

    // Paste from clipboard handler
    let on_paste = {
        let link = link.clone();
        let state = state.clone();

        Callback::from(move |_: MouseEvent| {
            let link = link.clone();
            let state = state.clone();

            spawn_local(async move {
                match read_clipboard().await {
                    Ok(text) => {
                        link.set(text.trim().to_string());
                        state.set(HomeState::Idle);
                    }
                    Err(e) => {
                        state.set(HomeState::Error(format!("Clipboard unavailable: {}", e)));
                    }
                }
            });
        })
    };

    // Submit handler, shared by the form and the button
    let submit = {
        let link = link.clone();
        let state = state.clone();
        let client = props.client.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |_: ()| {
            let target = match resolve_target(&link) {
                Ok(target) => target,
                Err(e) => {
                    state.set(HomeState::Error(e.to_string()));
                    return;
                }
            };

            state.set(HomeState::Loading);

            let link = link.clone();
            let state = state.clone();
            let client = client.clone();
            let on_navigate = on_navigate.clone();

            spawn_local(async move {
                match client.scrape(&target).await {
                    Ok(result) => {
                        state.set(HomeState::Idle);
                        on_navigate.emit(View::Results(Some(result)));
                    }
                    Err(e) => {
                        log::error!("Scrape failed: {}", e);
                        state.set(HomeState::Error("Failed to fetch data. Please try again.".to_string()));
                    }
                }
                link.set(String::new());
            });
        })
    };

    let on_submit = {
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let on_trending = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Trending))
    };

    let is_loading = *state == HomeState::Loading;
    let classification = classify(link.trim());

    html! {
        <div class="page-center">
            <div class="card card-narrow">
                <h1 class="card-title">{"YouTube Scraper"}</h1>
                <form onsubmit={on_submit} class="home-form">
                    <label class="input-label">{"Enter YouTube URL"}</label>
                    <div class="input-row">
                        <input
                            id="link-input"
                            type="text"
                            class="text-input"
                            value={(*link).clone()}
                            oninput={on_input}
                            placeholder="https://www.youtube.com/@username/"
                        />
                        <Button onclick={on_paste} disabled={is_loading} variant={ButtonVariant::Secondary}>
                            {"Paste"}
                        </Button>
                    </div>

                    if !link.trim().is_empty() {
                        <ClassificationBadge classification={classification} />
                    }

                    <Button onclick={on_click} disabled={is_loading} variant={ButtonVariant::Primary} block={true}>
                        {if is_loading { "Loading..." } else { "Scrape Data" }}
                    </Button>
                </form>

                if let HomeState::Error(err) = &*state {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                }

                <div class="footer-links">
                    <Button onclick={on_trending} variant={ButtonVariant::Secondary}>
                        {"Trending videos"}
                    </Button>
                </div>
            </div>
        </div>
    }
}

async fn read_clipboard() -> Result<String, String> {
    let text = readClipboard().await.map_err(|e| js_error_message(&e))?;
    text.as_string()
        .ok_or_else(|| "clipboard did not contain text".to_string())
}
