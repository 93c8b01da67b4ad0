//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Link management routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Create short URLs for a batch of long URLs
///
/// Other methods on `/shorten` are answered with 405 Method Not Allowed.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
