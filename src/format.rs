/// Display helpers for scraped data
use std::sync::LazyLock;

use regex::Regex;

use crate::api::models::NOT_AVAILABLE;

static ANCHOR_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?\s+)?href="([^"]*)"([^>]*)>(.*?)</a>"#).expect("valid anchor pattern")
});

const LINK_CLASS: &str = "text-blue-600 hover:text-blue-800 hover:underline";

/// Insert thousands separators into integer counts ("1234567" → "1,234,567")
///
/// Anything that is not a plain integer ("1.2M", "N/A") is returned unchanged.
pub fn format_count(raw: &str) -> String {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return raw.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}", sign, grouped)
}

/// Cut `text` to `max_chars` characters, adding "..." when something was dropped
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Comment HTML with line breaks and links styled to open in a new tab
pub fn process_comment_text(text: &str) -> String {
    let with_breaks = text.replace('\n', "<br>");
    ANCHOR_TAG
        .replace_all(
            &with_breaks,
            format!(
                r#"<a href="$1" class="{}" target="_blank" rel="noopener noreferrer">$3</a>"#,
                LINK_CLASS
            )
            .as_str(),
        )
        .into_owned()
}

/// Letter shown in place of a missing profile picture
pub fn avatar_initial(username: &str) -> String {
    username
        .trim_start_matches('@')
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

pub fn location_label(location: &str) -> String {
    if location == NOT_AVAILABLE || location.trim().is_empty() {
        "Not specified".to_string()
    } else {
        location.to_string()
    }
}

pub fn has_value(text: &str) -> bool {
    text != NOT_AVAILABLE && !text.trim().is_empty()
}

/// Date part of an ISO-8601 timestamp ("2024-05-01T10:00:00Z" → "2024-05-01")
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
