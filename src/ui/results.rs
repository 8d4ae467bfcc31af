/// Results view for scraped channel or video data

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::api::models::{ChannelDetails, Comment, Playlist, VideoDetails};
use crate::api::ScrapeResult;
use crate::format::{date_part, format_count, has_value, process_comment_text, truncate};
use crate::route::View;
use crate::ui::components::{MessageCard, ProfilePicture, StatCard};

const CHART_COLORS: [&str; 7] = [
    "#3b82f6", "#8b5cf6", "#10b981", "#f59e0b", "#ef4444", "#f43f5e", "#14b8a6",
];

/// One bar in the top-playlists chart
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistBar {
    pub name: String,
    pub item_count: u64,
    /// Width relative to the largest playlist, 0-100
    pub percent: u8,
    pub color: &'static str,
}

/// Bars for the largest playlists, biggest first
pub fn playlist_bars(playlists: &[Playlist], limit: usize) -> Vec<PlaylistBar> {
    let mut sorted: Vec<&Playlist> = playlists.iter().collect();
    sorted.sort_by(|a, b| b.item_count.cmp(&a.item_count).then_with(|| a.title.cmp(&b.title)));

    let max = sorted.first().map_or(0, |p| p.item_count);

    sorted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, playlist)| PlaylistBar {
            name: truncate(&playlist.title, 20),
            item_count: playlist.item_count,
            percent: if max == 0 {
                0
            } else {
                (u128::from(playlist.item_count) * 100 / u128::from(max)) as u8
            },
            color: CHART_COLORS[i % CHART_COLORS.len()],
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ResultsProps {
    pub result: Option<ScrapeResult>,
    pub on_navigate: Callback<View>,
    pub on_back: Callback<MouseEvent>,
}

#[function_component(Results)]
pub fn results(props: &ResultsProps) -> Html {
    match &props.result {
        Some(ScrapeResult::Channel(channel)) => html! {
            <ChannelResults channel={channel.clone()} />
        },
        Some(ScrapeResult::Video(video)) => html! {
            <VideoResults video={video.clone()} on_navigate={props.on_navigate.clone()} />
        },
        None => html! {
            <MessageCard
                title="Error"
                message="No valid data found. Please go back and try again."
                on_back={props.on_back.clone()}
            />
        },
    }
}

#[derive(Properties, PartialEq)]
struct ChannelResultsProps {
    channel: ChannelDetails,
}

#[function_component(ChannelResults)]
fn channel_results(props: &ChannelResultsProps) -> Html {
    let channel = &props.channel;
    let analytics = &channel.analytics;
    let bars = playlist_bars(&analytics.playlists, CHART_COLORS.len());

    html! {
        <div class="page">
            <div class="card channel-header">
                <ProfilePicture src={channel.profile_picture.clone()} name={channel.channel_name.clone()} />
                <div>
                    <h1 class="card-title">{&channel.channel_name}</h1>
                    if has_value(&channel.channel_description) {
                        <p class="text-muted">{truncate(&channel.channel_description, 200)}</p>
                    }
                </div>
            </div>

            <div class="stats-grid">
                <StatCard title="Subscribers" value={channel.subscriber_count.clone()} accent="text-blue" />
                <StatCard title="Total Videos" value={channel.total_videos.clone()} accent="text-purple" />
                <StatCard title="Total Views" value={channel.view_count.clone()} accent="text-orange" />
                if !analytics.upload_frequency.frequency.is_empty() {
                    <StatCard title="Upload Frequency" value={analytics.upload_frequency.frequency.clone()} />
                }
                <StatCard title="Engagement Rate" value={format!("{:.2}%", analytics.engagement_rate)} />
            </div>

            if !bars.is_empty() {
                <div class="card">
                    <h2 class="section-title">{"Top Playlists"}</h2>
                    <div class="bar-chart">
                        {for bars.iter().map(|bar| html! {
                            <div class="bar-row">
                                <span class="bar-label">{&bar.name}</span>
                                <div class="bar-track">
                                    <div
                                        class="bar-fill"
                                        style={format!("width: {}%; background-color: {};", bar.percent, bar.color)}
                                    ></div>
                                </div>
                                <span class="bar-value">{bar.item_count}</span>
                            </div>
                        })}
                    </div>
                </div>
            }

            <div class="card">
                <h2 class="section-title">{"All Playlists"}</h2>
                if analytics.playlists.is_empty() {
                    <p class="text-muted">{"No public playlists."}</p>
                }
                <div class="playlist-grid">
                    {for analytics.playlists.iter().map(|playlist| html! {
                        <div class="playlist-card" key={playlist.id.clone()}>
                            if let Some(thumbnail) = &playlist.thumbnail {
                                <img src={thumbnail.clone()} alt={playlist.title.clone()} class="playlist-thumbnail" />
                            }
                            <h3 class="playlist-title">{truncate(&playlist.title, 30)}</h3>
                            <p class="text-muted">{format!("{} videos", playlist.item_count)}</p>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VideoResultsProps {
    video: VideoDetails,
    on_navigate: Callback<View>,
}

#[function_component(VideoResults)]
fn video_results(props: &VideoResultsProps) -> Html {
    let video = &props.video;

    html! {
        <div class="page">
            <div class="card video-header">
                <h1 class="card-title">{&video.video_title}</h1>
                if let Some(thumbnail) = &video.thumbnail {
                    <img src={thumbnail.clone()} alt={video.video_title.clone()} class="video-thumbnail" />
                }
                <div class="video-stats">
                    <span class="video-stat">{format!("👁 {}", format_count(&video.view_count))}</span>
                    <span class="video-stat">{format!("👍 {}", format_count(&video.like_count))}</span>
                    <span class="video-stat">{format!("💬 {}", format_count(&video.comment_count))}</span>
                </div>
            </div>

            if !video.comments.is_empty() {
                <div class="card">
                    <h2 class="section-title">{"Comments"}</h2>
                    <div class="comment-list">
                        {for video.comments.iter().map(|comment| comment_item(comment, &props.on_navigate))}
                    </div>
                </div>
            }
        </div>
    }
}

fn comment_item(comment: &Comment, on_navigate: &Callback<View>) -> Html {
    let on_view_channel = {
        let on_navigate = on_navigate.clone();
        let username = comment.username.clone();
        Callback::from(move |_: MouseEvent| {
            on_navigate.emit(View::UserDetails(username.clone()));
        })
    };

    let text = Html::from_html_unchecked(AttrValue::from(process_comment_text(&comment.comment)));

    html! {
        <div class="comment-item">
            <ProfilePicture
                src={comment.profile_picture.clone()}
                name={comment.username.clone()}
                size_class="avatar-small"
            />
            <div class="comment-body">
                <div class="comment-meta">
                    <span class="comment-author">{&comment.username}</span>
                    <span class="comment-date">{date_part(&comment.timestamp)}</span>
                </div>
                <div class="comment-text">{text}</div>
                <Button onclick={on_view_channel} variant={ButtonVariant::Secondary}>
                    {"View Channel"}
                </Button>
            </div>
        </div>
    }
}
