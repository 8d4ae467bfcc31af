/// Mapping from user-entered URLs to backend endpoints
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::detectors::{classify, Platform};

/// YouTube URL shapes the backend can serve
static SUPPORTED_YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?youtube\.com/(channel/[^/]+|c/[^/]+|user/[^/]+|@[^/]+|watch\?v=[^&]+|shorts/[^/]+)",
    )
    .expect("valid YouTube URL pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("Invalid YouTube URL. Please check the link.")]
    InvalidYouTubeUrl,

    #[error("{0} links are not supported yet. Please enter a YouTube URL.")]
    UnsupportedPlatform(Platform),

    #[error("Could not find a channel or video id in the link.")]
    MissingIdentifier,
}

/// One backend request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeTarget {
    /// GET /api/video/<id>
    Video(String),
    /// GET /api/channel/<id, handle or custom name>
    Channel(String),
    /// GET /api/video/trending
    Trending { region: String, max_results: u32 },
    /// GET /api/video/categories
    Categories { region: String },
    /// POST /scrape with the channel URL in the body
    ChannelByUrl(String),
}

impl ScrapeTarget {
    pub fn is_post(&self) -> bool {
        matches!(self, ScrapeTarget::ChannelByUrl(_))
    }

    /// Path segments below the API base URL
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            ScrapeTarget::Video(id) => vec!["api", "video", id.as_str()],
            ScrapeTarget::Channel(id) => vec!["api", "channel", id.as_str()],
            ScrapeTarget::Trending { .. } => vec!["api", "video", "trending"],
            ScrapeTarget::Categories { .. } => vec!["api", "video", "categories"],
            ScrapeTarget::ChannelByUrl(_) => vec!["scrape"],
        }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            ScrapeTarget::Trending { region, max_results } => vec![
                ("regionCode", region.clone()),
                ("maxResults", max_results.to_string()),
            ],
            ScrapeTarget::Categories { region } => vec![("regionCode", region.clone())],
            _ => Vec::new(),
        }
    }

    /// JSON request body for POST targets
    pub fn body(&self) -> Option<String> {
        match self {
            ScrapeTarget::ChannelByUrl(url) => Some(serde_json::json!({ "url": url }).to_string()),
            _ => None,
        }
    }
}

/// Work out which backend call serves the URL a user typed in
pub fn resolve_target(url: &str) -> Result<ScrapeTarget, TargetError> {
    let url = url.trim();

    let classification = classify(url);
    if !matches!(classification.platform, Platform::YouTube | Platform::Unknown) {
        return Err(TargetError::UnsupportedPlatform(classification.platform));
    }

    if !SUPPORTED_YOUTUBE_URL.is_match(url) {
        return Err(TargetError::InvalidYouTubeUrl);
    }

    let identifier = extract_identifier(url)
        .filter(|id| !id.is_empty())
        .ok_or(TargetError::MissingIdentifier)?;

    if url.contains("watch?v=") || url.contains("/shorts/") {
        Ok(ScrapeTarget::Video(identifier))
    } else {
        Ok(ScrapeTarget::Channel(identifier))
    }
}

/// Pull the channel id, handle, custom name or video id out of a YouTube URL
pub fn extract_identifier(url: &str) -> Option<String> {
    if let Some(rest) = after(url, "/channel/") {
        Some(leading_segment(rest).to_string())
    } else if let Some(rest) = after(url, "/c/").or_else(|| after(url, "/user/")) {
        Some(leading_segment(rest).to_string())
    } else if let Some(rest) = after(url, "/@") {
        // The backend accepts handles with their '@'
        Some(format!("@{}", leading_segment(rest)))
    } else if let Some(rest) = after(url, "v=") {
        Some(leading_segment(rest).to_string())
    } else {
        after(url, "/shorts/").map(|rest| leading_segment(rest).to_string())
    }
}

/// Channel URL the scrape endpoint expects for a commenter's username
pub fn channel_url_for(username: &str) -> String {
    if username.starts_with("UC") {
        format!("https://youtube.com/channel/{}", username)
    } else if username.starts_with('@') {
        format!("https://youtube.com/{}", username)
    } else {
        format!("https://youtube.com/@{}", username)
    }
}

fn after<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    url.split_once(marker).map(|(_, rest)| rest)
}

fn leading_segment(rest: &str) -> &str {
    rest.split(['/', '?', '&', '#']).next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_urls() {
        assert_eq!(
            resolve_target("https://www.youtube.com/watch?v=abc123"),
            Ok(ScrapeTarget::Video("abc123".to_string()))
        );
        assert_eq!(
            resolve_target("https://www.youtube.com/watch?v=abc123&t=42s"),
            Ok(ScrapeTarget::Video("abc123".to_string()))
        );
        assert_eq!(
            resolve_target("youtube.com/shorts/sh0rt?feature=share"),
            Ok(ScrapeTarget::Video("sh0rt".to_string()))
        );
    }

    #[test]
    fn test_channel_urls() {
        assert_eq!(
            resolve_target("https://www.youtube.com/@someuser/"),
            Ok(ScrapeTarget::Channel("@someuser".to_string()))
        );
        assert_eq!(
            resolve_target("https://www.youtube.com/@someuser/videos"),
            Ok(ScrapeTarget::Channel("@someuser".to_string()))
        );
        assert_eq!(
            resolve_target("https://youtube.com/channel/UCabcdefghijklmnopqrstuv"),
            Ok(ScrapeTarget::Channel("UCabcdefghijklmnopqrstuv".to_string()))
        );
        assert_eq!(
            resolve_target("http://www.youtube.com/c/SomeName"),
            Ok(ScrapeTarget::Channel("SomeName".to_string()))
        );
        assert_eq!(
            resolve_target("  https://www.youtube.com/user/legacy  "),
            Ok(ScrapeTarget::Channel("legacy".to_string()))
        );
    }

    #[test]
    fn test_rejected_urls() {
        assert_eq!(resolve_target(""), Err(TargetError::InvalidYouTubeUrl));
        assert_eq!(resolve_target("https://www.youtube.com"), Err(TargetError::InvalidYouTubeUrl));
        assert_eq!(resolve_target("https://youtu.be/abc"), Err(TargetError::InvalidYouTubeUrl));
        assert_eq!(resolve_target("https://www.example.com"), Err(TargetError::InvalidYouTubeUrl));
        assert_eq!(
            resolve_target("https://www.tiktok.com/@creator123"),
            Err(TargetError::UnsupportedPlatform(Platform::TikTok))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TargetError::InvalidYouTubeUrl.to_string(),
            "Invalid YouTube URL. Please check the link."
        );
        assert_eq!(
            TargetError::UnsupportedPlatform(Platform::Instagram).to_string(),
            "Instagram links are not supported yet. Please enter a YouTube URL."
        );
    }

    #[test]
    fn test_channel_url_for() {
        assert_eq!(
            channel_url_for("UCabcdefghijklmnopqrstuv"),
            "https://youtube.com/channel/UCabcdefghijklmnopqrstuv"
        );
        assert_eq!(channel_url_for("@handle"), "https://youtube.com/@handle");
        assert_eq!(channel_url_for("Some Person"), "https://youtube.com/@Some Person");
    }

    #[test]
    fn test_target_request_parts() {
        let trending = ScrapeTarget::Trending { region: "GB".to_string(), max_results: 5 };
        assert_eq!(trending.path_segments(), vec!["api", "video", "trending"]);
        assert_eq!(
            trending.query(),
            vec![("regionCode", "GB".to_string()), ("maxResults", "5".to_string())]
        );
        assert!(!trending.is_post());
        assert_eq!(trending.body(), None);

        let scrape = ScrapeTarget::ChannelByUrl("https://youtube.com/@a".to_string());
        assert!(scrape.is_post());
        assert_eq!(scrape.body().as_deref(), Some(r#"{"url":"https://youtube.com/@a"}"#));
    }
}
