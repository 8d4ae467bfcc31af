/// String helpers shared by the platform rule tables
use regex::Regex;

/// Drop a single trailing '/' if present
pub fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Count every piece of `url` when split on '/', empty ones included
///
/// "https://host/name" yields 4: the scheme, the empty piece between the
/// slashes, the host and the name.
pub fn slash_pieces(url: &str) -> usize {
    url.split('/').count()
}

/// True when the URL stops at `domain`, with or without one trailing slash
pub fn ends_with_domain(url: &str, domain: &str) -> bool {
    strip_trailing_slash(url).ends_with(domain)
}

/// First capture group of `pattern` in `url`, or an empty string
pub fn capture_handle(pattern: &Regex, url: &str) -> String {
    pattern
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_slash() {
        assert_eq!(strip_trailing_slash("https://a.com/x/"), "https://a.com/x");
        assert_eq!(strip_trailing_slash("https://a.com/x"), "https://a.com/x");
        assert_eq!(strip_trailing_slash("https://a.com//"), "https://a.com/");
        assert_eq!(strip_trailing_slash(""), "");
    }

    #[test]
    fn test_slash_pieces() {
        assert_eq!(slash_pieces("https://www.instagram.com/somepage"), 4);
        assert_eq!(slash_pieces("https://www.instagram.com/somepage/"), 5);
        assert_eq!(slash_pieces("https://www.instagram.com"), 3);
        assert_eq!(slash_pieces("https://www.facebook.com/"), 4);
        assert_eq!(slash_pieces("www.instagram.com/somepage/reels"), 3);
        assert_eq!(slash_pieces(""), 1);
        assert_eq!(slash_pieces("///"), 4);
    }

    #[test]
    fn test_ends_with_domain() {
        assert!(ends_with_domain("https://www.tiktok.com", "tiktok.com"));
        assert!(ends_with_domain("https://www.tiktok.com/", "tiktok.com"));
        assert!(!ends_with_domain("https://www.tiktok.com//", "tiktok.com"));
        assert!(!ends_with_domain("https://www.tiktok.com/foryou", "tiktok.com"));
    }

    #[test]
    fn test_capture_handle() {
        let pattern = Regex::new(r"example\.com/@([^/]+)").unwrap();
        assert_eq!(capture_handle(&pattern, "https://example.com/@someone/about"), "someone");
        assert_eq!(capture_handle(&pattern, "https://example.com/someone"), "");
    }
}
