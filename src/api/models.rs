/// Response bodies returned by the scraping backend
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// Counts come back as numbers, numeric strings or pre-formatted text ("1.2M")
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => not_available(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDetails {
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub subscriber_count: String,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub total_videos: String,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub view_count: String,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub channel_description: String,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub channel_location: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub analytics: ChannelAnalytics,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelAnalytics {
    pub upload_frequency: UploadFrequency,
    pub playlists: Vec<Playlist>,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadFrequency {
    pub frequency: String,
    pub uploads_per_month: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub item_count: u64,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDetails {
    #[serde(default)]
    pub video_title: String,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub view_count: String,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub like_count: String,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub comment_count: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingVideos {
    #[serde(default)]
    pub region_code: String,
    #[serde(default)]
    pub trending_videos: Vec<TrendingVideo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingVideo {
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub view_count: String,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub like_count: String,
    #[serde(default = "not_available", deserialize_with = "display_string")]
    pub comment_count: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCategories {
    #[serde(default)]
    pub region_code: String,
    #[serde(default)]
    pub categories: Vec<VideoCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCategory {
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub assignable: bool,
}

/// Payload carried from the home view to the results view
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeResult {
    Channel(ChannelDetails),
    Video(VideoDetails),
}

impl ScrapeResult {
    /// Decide between channel and video data by which title field is present
    pub fn from_json(value: Value) -> Option<ScrapeResult> {
        let has = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty())
        };

        let is_channel = has("channel_name");
        let is_video = has("video_title");

        if is_channel {
            serde_json::from_value(value).ok().map(ScrapeResult::Channel)
        } else if is_video {
            serde_json::from_value(value).ok().map(ScrapeResult::Video)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channel_response() {
        let body = json!({
            "channel_id": "UC123",
            "channel_name": "Rustaceans",
            "subscriber_count": "1.2M",
            "total_videos": "340",
            "view_count": "98.1M",
            "channel_description": "All things Rust",
            "channel_location": "N/A",
            "profile_picture": "https://img.example/p.jpg",
            "analytics": {
                "upload_frequency": { "frequency": "2.5 times per week", "uploads_per_month": 10.0 },
                "playlists": [
                    { "id": "PL1", "title": "Async", "item_count": 12, "thumbnail": null }
                ],
                "engagement_rate": 4.2
            },
            "created_at": "2015-01-01T00:00:00Z"
        });

        match ScrapeResult::from_json(body) {
            Some(ScrapeResult::Channel(channel)) => {
                assert_eq!(channel.channel_name, "Rustaceans");
                assert_eq!(channel.subscriber_count, "1.2M");
                assert_eq!(channel.analytics.playlists.len(), 1);
                assert_eq!(channel.analytics.playlists[0].item_count, 12);
                assert_eq!(channel.analytics.upload_frequency.frequency, "2.5 times per week");
                assert_eq!(channel.last_updated, None);
            }
            other => panic!("expected channel data, got {:?}", other),
        }
    }

    #[test]
    fn test_video_response_with_numeric_counts() {
        let body = json!({
            "video_title": "Ownership explained",
            "view_count": 123456,
            "like_count": "789",
            "comment_count": null,
            "thumbnail": "https://img.example/t.jpg",
            "comments": [
                { "username": "ferris", "comment": "Great!", "timestamp": "2024-05-01T10:00:00Z" }
            ]
        });

        match ScrapeResult::from_json(body) {
            Some(ScrapeResult::Video(video)) => {
                assert_eq!(video.view_count, "123456");
                assert_eq!(video.like_count, "789");
                assert_eq!(video.comment_count, "N/A");
                assert_eq!(video.comments[0].username, "ferris");
                assert_eq!(video.comments[0].profile_picture, None);
            }
            other => panic!("expected video data, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_titles_yield_no_result() {
        assert_eq!(ScrapeResult::from_json(json!({})), None);
        assert_eq!(ScrapeResult::from_json(json!({ "channel_name": "" })), None);
        assert_eq!(ScrapeResult::from_json(json!("just a string")), None);
    }

    #[test]
    fn test_trending_and_categories() {
        let trending: TrendingVideos = serde_json::from_value(json!({
            "region_code": "US",
            "trending_videos": [
                { "video_id": "v1", "title": "Hit", "view_count": "10", "published_at": "2024-01-01T00:00:00Z" }
            ]
        }))
        .unwrap();
        assert_eq!(trending.trending_videos[0].like_count, "N/A");

        let categories: VideoCategories = serde_json::from_value(json!({
            "region_code": "US",
            "categories": [{ "category_id": "10", "title": "Music", "assignable": true }]
        }))
        .unwrap();
        assert!(categories.categories[0].assignable);
    }
}
