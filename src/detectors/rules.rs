/// Ordered detection rules, one table per platform
///
/// Rules are tested top to bottom and the first match decides the page type,
/// so a URL that satisfies several patterns resolves to the earliest one.
use std::sync::LazyLock;

use regex::Regex;

use super::helpers::{capture_handle, ends_with_domain, slash_pieces, strip_trailing_slash};
use super::{Classification, PageType, Platform};

/// One (predicate, page type, extractor) entry
pub struct Rule {
    pub page_type: PageType,
    pub matches: fn(&str) -> bool,
    /// Pulls the handle out of the URL for this page type, if it has one
    pub handle: Option<fn(&str) -> String>,
}

/// Everything needed to detect pages for one platform
pub struct PlatformRules {
    pub platform: Platform,
    /// Host substrings that route a URL to this table
    pub markers: &'static [&'static str],
    /// Applied to the URL before any rule is tested
    pub normalize: fn(&str) -> &str,
    pub rules: &'static [Rule],
}

impl PlatformRules {
    pub fn claims(&self, url: &str) -> bool {
        self.markers.iter().any(|marker| url.contains(marker))
    }

    /// Run the rules in order against `url`
    pub fn detect(&self, url: &str) -> Classification {
        let url = (self.normalize)(url);

        let (page_type, username) = match self.rules.iter().find(|rule| (rule.matches)(url)) {
            Some(rule) => (rule.page_type, rule.handle.map(|extract| extract(url)).unwrap_or_default()),
            None => (PageType::Unknown, String::new()),
        };

        log::debug!("{} URL classified as {}: {}", self.platform, page_type, url);

        Classification {
            platform: self.platform,
            page_type,
            username,
        }
    }
}

/// Dispatch order: the first table whose marker appears wins
pub static PLATFORMS: [PlatformRules; 4] = [
    PlatformRules {
        platform: Platform::YouTube,
        markers: &["youtube.com", "youtu.be"],
        normalize: unchanged,
        rules: &YOUTUBE_RULES,
    },
    PlatformRules {
        platform: Platform::TikTok,
        markers: &["tiktok.com"],
        normalize: unchanged,
        rules: &TIKTOK_RULES,
    },
    PlatformRules {
        platform: Platform::Instagram,
        markers: &["instagram.com"],
        normalize: strip_trailing_slash,
        rules: &INSTAGRAM_RULES,
    },
    PlatformRules {
        platform: Platform::Facebook,
        markers: &["facebook.com"],
        normalize: unchanged,
        rules: &FACEBOOK_RULES,
    },
];

fn unchanged(url: &str) -> &str {
    url
}

// YouTube

static YOUTUBE_RULES: [Rule; 4] = [
    Rule { page_type: PageType::Shorts, matches: youtube_shorts, handle: None },
    Rule { page_type: PageType::Video, matches: youtube_watch, handle: None },
    Rule { page_type: PageType::ChannelPage, matches: has_at_path, handle: Some(youtube_handle) },
    Rule { page_type: PageType::Homepage, matches: youtube_home, handle: None },
];

static YOUTUBE_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/@([^/]+)").expect("valid YouTube handle pattern"));

fn youtube_shorts(url: &str) -> bool {
    url.contains("/shorts/")
}

fn youtube_watch(url: &str) -> bool {
    url.contains("/watch?v=")
}

fn youtube_home(url: &str) -> bool {
    ends_with_domain(url, "youtube.com")
}

fn youtube_handle(url: &str) -> String {
    capture_handle(&YOUTUBE_HANDLE, url)
}

// TikTok

static TIKTOK_RULES: [Rule; 3] = [
    Rule { page_type: PageType::Post, matches: tiktok_video, handle: None },
    Rule { page_type: PageType::ProfilePage, matches: has_at_path, handle: Some(tiktok_handle) },
    Rule { page_type: PageType::Homepage, matches: tiktok_home, handle: None },
];

static TIKTOK_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tiktok\.com/@([^/]+)").expect("valid TikTok handle pattern"));

fn tiktok_video(url: &str) -> bool {
    url.contains("/video/")
}

fn tiktok_home(url: &str) -> bool {
    ends_with_domain(url, "tiktok.com")
}

fn tiktok_handle(url: &str) -> String {
    capture_handle(&TIKTOK_HANDLE, url)
}

// Instagram (rules see the URL with its trailing slash removed)

static INSTAGRAM_RULES: [Rule; 3] = [
    Rule { page_type: PageType::Post, matches: instagram_post, handle: None },
    Rule { page_type: PageType::ProfilePage, matches: single_path_segment, handle: Some(instagram_handle) },
    Rule { page_type: PageType::Homepage, matches: instagram_home, handle: None },
];

static INSTAGRAM_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"instagram\.com/([^/]+)").expect("valid Instagram handle pattern"));

fn instagram_post(url: &str) -> bool {
    url.contains("/p/") || url.contains("/reel/")
}

fn instagram_home(url: &str) -> bool {
    url == "https://www.instagram.com" || url == "https://www.instagram.com/"
}

fn instagram_handle(url: &str) -> String {
    capture_handle(&INSTAGRAM_HANDLE, url)
}

// Facebook

static FACEBOOK_RULES: [Rule; 3] = [
    Rule { page_type: PageType::Post, matches: facebook_post, handle: None },
    Rule { page_type: PageType::ProfilePage, matches: facebook_profile, handle: Some(facebook_handle) },
    Rule { page_type: PageType::Homepage, matches: facebook_home, handle: None },
];

static FACEBOOK_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"facebook\.com/([^/]+)").expect("valid Facebook handle pattern"));

fn facebook_post(url: &str) -> bool {
    url.contains("/posts/") || url.contains("/photos/") || url.contains("/videos/")
}

fn facebook_profile(url: &str) -> bool {
    url.contains("/profile.php") || (single_path_segment(url) && !url.contains("/posts/"))
}

fn facebook_home(url: &str) -> bool {
    ends_with_domain(url, "facebook.com")
}

fn facebook_handle(url: &str) -> String {
    capture_handle(&FACEBOOK_HANDLE, url)
}

// Shared predicates

fn has_at_path(url: &str) -> bool {
    url.contains("/@")
}

/// "scheme:", "", host and exactly one more piece
fn single_path_segment(url: &str) -> bool {
    slash_pieces(url) == 4
}
