//! DTOs for the batch shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortenedUrl;

/// Request to shorten one or more URLs.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "At least one URL is required"))]
    pub urls: Vec<String>,
}

/// Response listing one result per submitted URL, in submission order.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub results: Vec<UrlPair>,
}

/// A submitted URL and the short URL now pointing at it.
#[derive(Debug, Serialize)]
pub struct UrlPair {
    pub original: String,
    pub short: String,
}

impl From<ShortenedUrl> for UrlPair {
    fn from(item: ShortenedUrl) -> Self {
        Self {
            original: item.original,
            short: item.short_url,
        }
    }
}

impl From<Vec<ShortenedUrl>> for ShortenResponse {
    fn from(items: Vec<ShortenedUrl>) -> Self {
        Self {
            results: items.into_iter().map(UrlPair::from).collect(),
        }
    }
}
