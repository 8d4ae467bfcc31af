/// Platform and page-type detection for social-media URLs
///
/// Every supported platform is described by a rule table (see `rules`), and a
/// single generic detector walks that table in order. The dispatcher picks the
/// table by looking for a host marker in the raw string.
///
/// Examples:
/// - https://www.youtube.com/watch?v=abc123 → YouTube / Video
/// - https://www.tiktok.com/@creator123 → TikTok / Profile Page / "creator123"
/// - https://www.example.com → Unknown / Unknown
mod helpers;
mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use rules::{PlatformRules, Rule, PLATFORMS};

/// The social-media service a URL belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    YouTube,
    TikTok,
    Instagram,
    Facebook,
    Unknown,
}

impl Platform {
    /// Page types a detector for this platform is allowed to return
    pub fn page_types(self) -> &'static [PageType] {
        match self {
            Platform::YouTube => &[
                PageType::Shorts,
                PageType::Video,
                PageType::ChannelPage,
                PageType::Homepage,
                PageType::Unknown,
            ],
            Platform::TikTok | Platform::Instagram | Platform::Facebook => &[
                PageType::Post,
                PageType::ProfilePage,
                PageType::Homepage,
                PageType::Unknown,
            ],
            Platform::Unknown => &[PageType::Unknown],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What kind of page a URL points to within its platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageType {
    Shorts,
    Video,
    #[serde(rename = "Channel Page")]
    ChannelPage,
    Post,
    #[serde(rename = "Profile Page")]
    ProfilePage,
    Homepage,
    Unknown,
}

impl PageType {
    pub fn label(self) -> &'static str {
        match self {
            PageType::Shorts => "Shorts",
            PageType::Video => "Video",
            PageType::ChannelPage => "Channel Page",
            PageType::Post => "Post",
            PageType::ProfilePage => "Profile Page",
            PageType::Homepage => "Homepage",
            PageType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub platform: Platform,
    pub page_type: PageType,
    /// Extracted handle, empty when the page type carries none
    pub username: String,
}

impl Classification {
    pub fn unknown() -> Self {
        Classification {
            platform: Platform::Unknown,
            page_type: PageType::Unknown,
            username: String::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.platform == Platform::Unknown
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Classify an arbitrary string as a social-media URL.
///
/// Total over all inputs: anything without a recognised host marker comes
/// back as `Classification::unknown()`.
pub fn classify(url: &str) -> Classification {
    match platform_for(url) {
        Some(rules) => rules.detect(url),
        None => Classification::unknown(),
    }
}

/// Find the first platform table whose host marker appears in `url`
pub fn platform_for(url: &str) -> Option<&'static PlatformRules> {
    PLATFORMS.iter().find(|rules| rules.claims(url))
}
