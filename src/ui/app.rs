/// Application shell: configuration, navigation and view selection

use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::route::{Navigator, View};
use crate::ui::components::MessageCard;
use crate::ui::home::Home;
use crate::ui::results::Results;
use crate::ui::trending::Trending;
use crate::ui::user_details::UserDetails;

// Import JS bridge functions
#[wasm_bindgen(module = "/app.js")]
extern "C" {
    fn loadConfig() -> JsValue;
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let client = use_memo(config.clone(), |config| ApiClient::from_config(config));
    let navigator = use_state(|| Navigator::new(initial_view()));

    let on_navigate = {
        let navigator = navigator.clone();
        Callback::from(move |view: View| {
            let mut next = (*navigator).clone();
            next.push(view);
            navigator.set(next);
        })
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*navigator).clone();
            if next.back() {
                navigator.set(next);
            }
        })
    };

    let on_home = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*navigator).clone();
            next.reset();
            navigator.set(next);
        })
    };

    let content = match &*client {
        Err(e) => html! {
            <MessageCard title="Configuration error" message={e.to_string()} />
        },
        Ok(client) => match navigator.current() {
            View::Home => html! {
                <Home client={client.clone()} on_navigate={on_navigate.clone()} />
            },
            View::Results(result) => html! {
                <Results result={result.clone()} on_navigate={on_navigate.clone()} on_back={on_back.clone()} />
            },
            View::UserDetails(username) => html! {
                <UserDetails username={username.clone()} client={client.clone()} on_back={on_back.clone()} />
            },
            View::Trending => html! {
                <Trending
                    client={client.clone()}
                    default_region={config.default_region.clone()}
                    max_results={config.trending_max_results}
                    on_back={on_back.clone()}
                />
            },
        },
    };

    html! {
        <div class="app">
            <header class="app-header">
                <Button onclick={on_home} variant={ButtonVariant::Secondary}>
                    {"Media Scraper"}
                </Button>
            </header>
            <main>{content}</main>
            <p class="footer-popup">
                {concat!("Media Scraper v", env!("CARGO_PKG_VERSION"))}
            </p>
        </div>
    }
}

fn load_config() -> AppConfig {
    match serde_wasm_bindgen::from_value::<serde_json::Value>(loadConfig()) {
        Ok(value) => AppConfig::from_json(value),
        Err(e) => {
            log::warn!("Could not read page config, using defaults: {}", e);
            AppConfig::new()
        }
    }
}

fn initial_view() -> View {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| View::from_path(&path))
        .unwrap_or(View::Home)
}
