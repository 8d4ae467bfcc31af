/// Backend scraping API: request targets, response models and the HTTP client
pub mod client;
pub mod models;
pub mod target;

use thiserror::Error;

pub use client::ApiClient;
pub use models::ScrapeResult;
pub use target::{resolve_target, ScrapeTarget, TargetError};

/// Failure talking to the scraping backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("No valid data found. Please go back and try again.")]
    NoData,
}
