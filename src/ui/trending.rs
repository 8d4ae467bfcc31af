/// Trending videos and categories for a region

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::models::{TrendingVideos, VideoCategories};
use crate::api::{ApiClient, ApiError};
use crate::format::{date_part, format_count, truncate};
use crate::ui::cancel::CancelFlag;

#[derive(Clone, PartialEq)]
enum TrendingState {
    Loading(String),
    Loaded(TrendingVideos, VideoCategories),
    Error(String),
}

#[derive(Properties, PartialEq)]
pub struct TrendingProps {
    pub client: ApiClient,
    pub default_region: String,
    pub max_results: u32,
    pub on_back: Callback<MouseEvent>,
}

/// Two-letter region code, upper-cased; anything else falls back to `default`
pub fn normalize_region(input: &str, default: &str) -> String {
    let code = input.trim().to_ascii_uppercase();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        code
    } else {
        default.to_string()
    }
}

#[function_component(Trending)]
pub fn trending(props: &TrendingProps) -> Html {
    let region_input = use_state(|| props.default_region.clone());
    let region = use_state(|| props.default_region.clone());
    let state = use_state(|| TrendingState::Loading(props.default_region.clone()));

    // Load whenever the selected region changes
    {
        let state = state.clone();
        let client = props.client.clone();
        let max_results = props.max_results;

        use_effect_with((*region).clone(), move |region| {
            let region = region.clone();
            let cancelled = CancelFlag::new();
            state.set(TrendingState::Loading(region.clone()));

            {
                let cancelled = cancelled.clone();
                spawn_local(async move {
                    let result = load(&client, &region, max_results).await;
                    if cancelled.is_cancelled() {
                        log::debug!("Dropping stale trending response for {}", region);
                        return;
                    }
                    match result {
                        Ok((videos, categories)) => state.set(TrendingState::Loaded(videos, categories)),
                        Err(e) => state.set(TrendingState::Error(format!("Failed to load trending videos: {}", e))),
                    }
                });
            }
            move || cancelled.cancel()
        });
    }

    let on_region_input = {
        let region_input = region_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                region_input.set(input.value());
            }
        })
    };

    let on_apply = {
        let region_input = region_input.clone();
        let region = region.clone();
        let default_region = props.default_region.clone();

        Callback::from(move |_: MouseEvent| {
            let code = normalize_region(&region_input, &default_region);
            region_input.set(code.clone());
            region.set(code);
        })
    };

    html! {
        <div class="page">
            <div class="card">
                <Button onclick={props.on_back.clone()} variant={ButtonVariant::Secondary}>
                    {"← Back"}
                </Button>
                <h1 class="card-title">{"Trending Videos"}</h1>
                <div class="input-row">
                    <input
                        type="text"
                        class="text-input region-input"
                        maxlength="2"
                        value={(*region_input).clone()}
                        oninput={on_region_input}
                    />
                    <Button onclick={on_apply} variant={ButtonVariant::Primary}>
                        {"Load"}
                    </Button>
                </div>
            </div>

            {match &*state {
                TrendingState::Loading(code) => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{format!("Loading trending videos for {}...", code)}</p>
                    </div>
                },
                TrendingState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                TrendingState::Loaded(videos, categories) => html! {
                    <>
                        <div class="card">
                            <h2 class="section-title">{format!("Top videos in {}", videos.region_code)}</h2>
                            if videos.trending_videos.is_empty() {
                                <p class="text-muted">{"Nothing trending right now."}</p>
                            }
                            <div class="trending-list">
                                {for videos.trending_videos.iter().enumerate().map(|(rank, video)| html! {
                                    <div class="trending-item" key={video.video_id.clone()}>
                                        <span class="trending-rank">{rank + 1}</span>
                                        if let Some(thumbnail) = &video.thumbnail {
                                            <img src={thumbnail.clone()} alt={video.title.clone()} class="trending-thumbnail" />
                                        }
                                        <div class="trending-body">
                                            <a
                                                href={format!("https://www.youtube.com/watch?v={}", video.video_id)}
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                {truncate(&video.title, 80)}
                                            </a>
                                            <p class="text-muted">
                                                {format!(
                                                    "{} views · {} likes · {} comments",
                                                    format_count(&video.view_count),
                                                    format_count(&video.like_count),
                                                    format_count(&video.comment_count),
                                                )}
                                            </p>
                                            if let Some(published) = &video.published_at {
                                                <p class="text-muted">{date_part(published)}</p>
                                            }
                                        </div>
                                    </div>
                                })}
                            </div>
                        </div>

                        <div class="card">
                            <h2 class="section-title">{"Categories"}</h2>
                            <div class="category-list">
                                {for categories.categories.iter().filter(|c| c.assignable).map(|category| html! {
                                    <span class="category-chip" key={category.category_id.clone()}>
                                        {&category.title}
                                    </span>
                                })}
                            </div>
                        </div>
                    </>
                },
            }}
        </div>
    }
}

async fn load(
    client: &ApiClient,
    region: &str,
    max_results: u32,
) -> Result<(TrendingVideos, VideoCategories), ApiError> {
    let videos = client.trending(region, max_results).await?;
    let categories = client.categories(region).await?;
    Ok((videos, categories))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_region() {
        assert_eq!(normalize_region("gb", "US"), "GB");
        assert_eq!(normalize_region(" de ", "US"), "DE");
        assert_eq!(normalize_region("", "US"), "US");
        assert_eq!(normalize_region("USA", "US"), "US");
        assert_eq!(normalize_region("1A", "US"), "US");
    }
}
