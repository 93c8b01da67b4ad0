//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response Codes
///
/// - **302 Found**: `Location` carries the original URL
/// - **404 Not Found**: unknown or malformed code
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&code).await?;

    debug!(%code, "Redirecting");

    let location = location_header(&link.long_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value for a stored URL.
///
/// ASCII URLs are sent as stored. Anything else uses the percent-encoded
/// serialization of the parsed URL, since `HeaderValue` would otherwise carry
/// raw UTF-8 bytes.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    if long_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(long_url)
    {
        return Ok(value);
    }

    Url::parse(long_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            error!(%long_url, "Stored URL cannot be used as a Location header");
            AppError::internal("Stored URL is not redirectable", json!({}))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_ascii_passthrough() {
        let value = location_header("https://example.com/a?b=c").unwrap();
        assert_eq!(value, "https://example.com/a?b=c");
    }

    #[test]
    fn test_location_header_percent_encodes_non_ascii() {
        let value = location_header("https://example.com/привет").unwrap();
        assert_eq!(
            value,
            "https://example.com/%D0%BF%D1%80%D0%B8%D0%B2%D0%B5%D1%82"
        );
    }
}
