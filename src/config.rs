/// Runtime configuration for the scraper front-end
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://media-scrapper-app.vercel.app";
pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_TRENDING_RESULTS: u32 = 10;

/// Settings the host page may override through `window.MEDIA_SCRAPER_CONFIG`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub default_region: String,
    pub trending_max_results: u32,
}

impl AppConfig {
    pub fn new() -> Self {
        AppConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_region: DEFAULT_REGION.to_string(),
            trending_max_results: DEFAULT_TRENDING_RESULTS,
        }
    }

    /// Build from a JSON value, falling back to defaults on any mismatch
    pub fn from_json(value: serde_json::Value) -> Self {
        if value.is_null() {
            return Self::new();
        }

        match serde_json::from_value::<AppConfig>(value) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("Ignoring invalid config: {}", e);
                Self::new()
            }
        }
    }

    /// Replace empty or zero fields with their defaults
    fn sanitized(mut self) -> Self {
        if self.api_base_url.trim().is_empty() {
            self.api_base_url = DEFAULT_API_BASE_URL.to_string();
        }
        if self.default_region.trim().is_empty() {
            self.default_region = DEFAULT_REGION.to_string();
        }
        if self.trending_max_results == 0 {
            self.trending_max_results = DEFAULT_TRENDING_RESULTS;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.api_base_url, "https://media-scrapper-app.vercel.app");
        assert_eq!(config.default_region, "US");
        assert_eq!(config.trending_max_results, 10);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(json!({ "api_base_url": "http://localhost:5000" }));
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.default_region, "US");
        assert_eq!(config.trending_max_results, 10);
    }

    #[test]
    fn test_null_and_invalid_fall_back() {
        assert_eq!(AppConfig::from_json(serde_json::Value::Null), AppConfig::new());
        assert_eq!(AppConfig::from_json(json!({ "trending_max_results": "lots" })), AppConfig::new());
    }

    #[test]
    fn test_empty_fields_are_replaced() {
        let config = AppConfig::from_json(json!({
            "api_base_url": "  ",
            "default_region": "",
            "trending_max_results": 0,
        }));
        assert_eq!(config, AppConfig::new());
    }
}
