//! Handler for the batch shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates short URLs for a batch of long URLs.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Batch Processing
///
/// All URLs are validated before any link is created. If one is invalid the
/// whole request fails and nothing is stored. Duplicate URLs each get their
/// own short code.
///
/// # Request Body
///
/// ```json
/// { "urls": ["https://example.com", "https://rust-lang.org"] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "results": [
///     { "original": "https://example.com", "short": "http://localhost:8080/1a2b3c" },
///     { "original": "https://rust-lang.org", "short": "http://localhost:8080/4d5e6f" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, an empty or missing `urls`
/// list, an oversized batch, or any invalid URL.
/// Returns 500 Internal Server Error if a unique code cannot be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let results = state.shorten_service.shorten(payload.urls).await?;

    Ok(Json(ShortenResponse::from(results)))
}
