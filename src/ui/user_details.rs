/// Channel details for a commenter

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::models::ChannelDetails;
use crate::api::target::channel_url_for;
use crate::api::{ApiClient, ApiError, ScrapeResult, ScrapeTarget};
use crate::format::{format_count, has_value, location_label};
use crate::ui::cancel::CancelFlag;
use crate::ui::components::{LoadingCard, MessageCard, ProfilePicture};

#[derive(Clone, PartialEq)]
enum DetailsState {
    Loading,
    /// `None` when the backend knows nothing about the channel
    Loaded(Option<ChannelDetails>),
    Error(String),
}

#[derive(Properties, PartialEq)]
pub struct UserDetailsProps {
    pub username: String,
    pub client: ApiClient,
    pub on_back: Callback<MouseEvent>,
}

#[function_component(UserDetails)]
pub fn user_details(props: &UserDetailsProps) -> Html {
    let state = use_state(|| DetailsState::Loading);

    // Fetch whenever the username changes
    {
        let state = state.clone();
        let client = props.client.clone();

        use_effect_with(props.username.clone(), move |username| {
            let username = username.clone();
            let cancelled = CancelFlag::new();
            state.set(DetailsState::Loading);

            {
                let cancelled = cancelled.clone();
                spawn_local(async move {
                    let target = ScrapeTarget::ChannelByUrl(channel_url_for(&username));
                    let result = client.scrape(&target).await;
                    if cancelled.is_cancelled() {
                        log::debug!("Dropping stale channel details for {}", username);
                        return;
                    }
                    state.set(details_state(result));
                });
            }
            move || cancelled.cancel()
        });
    }

    match &*state {
        DetailsState::Loading => html! {
            <LoadingCard message={Some("Loading channel information...".to_string())} />
        },
        DetailsState::Error(err) => html! {
            <MessageCard title="Error loading channel" message={err.clone()} on_back={props.on_back.clone()} />
        },
        DetailsState::Loaded(channel) => html! {
            <div class="page-center">
                <div class="card card-narrow">
                    <h1 class="card-title">{"Channel Details"}</h1>
                    <Button onclick={props.on_back.clone()} variant={ButtonVariant::Secondary}>
                        {"← Back to Video"}
                    </Button>
                    <div class="details-box">
                        {match channel {
                            Some(channel) => channel_summary(channel),
                            None => html! {
                                <div class="text-center">
                                    <ProfilePicture src={None::<String>} name={props.username.clone()} />
                                    <p class="details-name">{&props.username}</p>
                                    <p class="text-muted">{"Channel information not available"}</p>
                                </div>
                            },
                        }}
                    </div>
                </div>
            </div>
        },
    }
}

fn details_state(result: Result<ScrapeResult, ApiError>) -> DetailsState {
    match result {
        Ok(ScrapeResult::Channel(channel)) => DetailsState::Loaded(Some(channel)),
        Ok(ScrapeResult::Video(_)) | Err(ApiError::NoData) => DetailsState::Loaded(None),
        Err(e) => DetailsState::Error(e.to_string()),
    }
}

fn channel_summary(channel: &ChannelDetails) -> Html {
    html! {
        <>
            <div class="avatar-row">
                <ProfilePicture src={channel.profile_picture.clone()} name={channel.channel_name.clone()} />
            </div>
            <div class="details-list">
                <p><strong>{"Channel Name: "}</strong>{&channel.channel_name}</p>
                <p><strong>{"Subscribers: "}</strong>{format_count(&channel.subscriber_count)}</p>
                <p><strong>{"Total Videos: "}</strong>{format_count(&channel.total_videos)}</p>
                <p><strong>{"Location: "}</strong>{location_label(&channel.channel_location)}</p>
                if has_value(&channel.channel_description) {
                    <div>
                        <strong>{"Description:"}</strong>
                        <p class="details-description">{&channel.channel_description}</p>
                    </div>
                }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_state_mapping() {
        assert!(matches!(details_state(Err(ApiError::NoData)), DetailsState::Loaded(None)));
        assert!(matches!(
            details_state(Err(ApiError::Transport("offline".to_string()))),
            DetailsState::Error(msg) if msg == "Network error: offline"
        ));
        assert!(matches!(
            details_state(Err(ApiError::Backend { status: 404, message: "Channel not found".to_string() })),
            DetailsState::Error(msg) if msg == "Channel not found"
        ));
    }
}
