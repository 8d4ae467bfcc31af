/// Reusable UI components

use patternfly_yew::prelude::{Button, ButtonVariant, Spinner};
use yew::prelude::*;

use crate::detectors::Classification;
use crate::format::avatar_initial;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    #[prop_or_default]
    pub accent: String,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <p class="stat-card-title">{&props.title}</p>
            <p class={classes!("stat-card-value", props.accent.clone())}>{&props.value}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfilePictureProps {
    pub src: Option<String>,
    pub name: String,
    #[prop_or(String::from("avatar-large"))]
    pub size_class: String,
}

/// Round profile image, or the first letter of the name when there is none
#[function_component(ProfilePicture)]
pub fn profile_picture(props: &ProfilePictureProps) -> Html {
    match &props.src {
        Some(src) if !src.is_empty() => html! {
            <img
                src={src.clone()}
                alt={props.name.clone()}
                class={classes!("avatar", props.size_class.clone())}
            />
        },
        _ => html! {
            <div class={classes!("avatar", "avatar-placeholder", props.size_class.clone())}>
                <span>{avatar_initial(&props.name)}</span>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageCardProps {
    pub title: String,
    pub message: String,
    #[prop_or_default]
    pub on_back: Option<Callback<MouseEvent>>,
}

#[function_component(MessageCard)]
pub fn message_card(props: &MessageCardProps) -> Html {
    html! {
        <div class="page-center">
            <div class="card card-narrow">
                if let Some(on_back) = &props.on_back {
                    <Button onclick={on_back.clone()} variant={ButtonVariant::Secondary}>
                        {"← Back"}
                    </Button>
                }
                <h1 class="card-title">{&props.title}</h1>
                <p class="text-error">{&props.message}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingCardProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(LoadingCard)]
pub fn loading_card(props: &LoadingCardProps) -> Html {
    html! {
        <div class="page-center">
            <div class="card card-narrow loading-text-center">
                <Spinner />
                if let Some(msg) = &props.message {
                    <p class="loading-message">{msg}</p>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClassificationBadgeProps {
    pub classification: Classification,
}

/// Inline summary of what the typed URL looks like
#[function_component(ClassificationBadge)]
pub fn classification_badge(props: &ClassificationBadgeProps) -> Html {
    let c = &props.classification;

    html! {
        <div class="classification-badge">
            <span class="badge-platform">{c.platform.label()}</span>
            <span class="badge-page-type">{c.page_type.label()}</span>
            if !c.username.is_empty() {
                <span class="badge-handle">{format!("@{}", c.username)}</span>
            }
        </div>
    }
}
