/// HTTP client for the scraping backend
///
/// Requests go out through the JS bridge (`fetch` lives on the JS side); this
/// module owns URL construction and turning raw responses into typed results.
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::models::{ScrapeResult, TrendingVideos, VideoCategories};
use super::target::ScrapeTarget;
use super::ApiError;
use crate::config::AppConfig;

// Import JS bridge functions
#[wasm_bindgen(module = "/app.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn httpGet(url: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn httpPost(url: &str, body: &str) -> Result<JsValue, JsValue>;
}

/// What the bridge hands back for every request
#[derive(Debug, Deserialize)]
struct BridgeResponse {
    status: u16,
    #[serde(default)]
    body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<ApiClient, ApiError> {
        let base = Url::parse(base_url.trim())
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(ApiClient { base })
    }

    pub fn from_config(config: &AppConfig) -> Result<ApiClient, ApiError> {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Full request URL for a target, path segments percent-encoded
    pub fn request_url(&self, target: &ScrapeTarget) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);

        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(target.path_segments());

        let query = target.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Channel or video details for a scrape target
    pub async fn scrape(&self, target: &ScrapeTarget) -> Result<ScrapeResult, ApiError> {
        let value = self.send(target).await?;
        ScrapeResult::from_json(value).ok_or(ApiError::NoData)
    }

    pub async fn trending(&self, region: &str, max_results: u32) -> Result<TrendingVideos, ApiError> {
        let target = ScrapeTarget::Trending {
            region: region.to_string(),
            max_results,
        };
        decode(self.send(&target).await?)
    }

    pub async fn categories(&self, region: &str) -> Result<VideoCategories, ApiError> {
        let target = ScrapeTarget::Categories {
            region: region.to_string(),
        };
        decode(self.send(&target).await?)
    }

    async fn send(&self, target: &ScrapeTarget) -> Result<Value, ApiError> {
        let url = self.request_url(target)?;
        let method = if target.is_post() { "POST" } else { "GET" };
        log::info!("{} {}", method, url);

        let raw = match target.body() {
            Some(body) => httpPost(url.as_str(), &body).await,
            None => httpGet(url.as_str()).await,
        };

        let result = raw
            .map_err(|e| ApiError::Transport(js_error_message(&e)))
            .and_then(|js| {
                serde_wasm_bindgen::from_value::<BridgeResponse>(js)
                    .map_err(|e| ApiError::Decode(e.to_string()))
            })
            .and_then(|response| interpret_response(response.status, &response.body));

        if let Err(e) = &result {
            log::error!("{} {} failed: {}", method, url, e);
        }

        result
    }
}

/// Turn a status code and body text into JSON or a backend error
pub fn interpret_response(status: u16, body: &str) -> Result<Value, ApiError> {
    let success = (200..300).contains(&status);

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !success => return Err(status_error(status)),
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(ApiError::Backend {
            status,
            message: message.to_string(),
        });
    }

    if !success {
        return Err(status_error(status));
    }

    Ok(value)
}

fn status_error(status: u16) -> ApiError {
    ApiError::Backend {
        status,
        message: format!("Request failed with status {}", status),
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) fn js_error_message(error: &JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("https://media-scrapper-app.vercel.app").unwrap()
    }

    #[test]
    fn test_request_url_for_video_and_channel() {
        let client = client();

        let url = client.request_url(&ScrapeTarget::Video("abc123".to_string())).unwrap();
        assert_eq!(url.as_str(), "https://media-scrapper-app.vercel.app/api/video/abc123");

        let url = client.request_url(&ScrapeTarget::Channel("@some user".to_string())).unwrap();
        assert_eq!(url.as_str(), "https://media-scrapper-app.vercel.app/api/channel/@some%20user");
    }

    #[test]
    fn test_request_url_with_query() {
        let url = client()
            .request_url(&ScrapeTarget::Trending {
                region: "US".to_string(),
                max_results: 10,
            })
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://media-scrapper-app.vercel.app/api/video/trending?regionCode=US&maxResults=10"
        );
    }

    #[test]
    fn test_request_url_keeps_base_path() {
        let client = ApiClient::new("http://localhost:5000/backend/").unwrap();
        let url = client
            .request_url(&ScrapeTarget::ChannelByUrl("https://youtube.com/@a".to_string()))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/backend/scrape");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(ApiClient::new("not a url"), Err(ApiError::InvalidBaseUrl(_))));
        assert!(matches!(ApiClient::new("mailto:someone@example.com"), Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_interpret_success() {
        let value = interpret_response(200, r#"{"video_title": "t"}"#).unwrap();
        assert_eq!(value["video_title"], "t");
    }

    #[test]
    fn test_interpret_backend_error_body() {
        assert_eq!(
            interpret_response(429, r#"{"error": "YouTube API quota exceeded"}"#),
            Err(ApiError::Backend {
                status: 429,
                message: "YouTube API quota exceeded".to_string(),
            })
        );
        // Some handlers report errors with a 200
        assert!(matches!(
            interpret_response(200, r#"{"error": "Channel not found"}"#),
            Err(ApiError::Backend { status: 200, .. })
        ));
    }

    #[test]
    fn test_interpret_non_json() {
        assert_eq!(
            interpret_response(502, "<html>Bad Gateway</html>"),
            Err(ApiError::Backend {
                status: 502,
                message: "Request failed with status 502".to_string(),
            })
        );
        assert!(matches!(interpret_response(200, "oops"), Err(ApiError::Decode(_))));
    }
}
