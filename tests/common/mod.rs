#![allow(dead_code)]

use axum::Router;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use bulk_shortener::application::services::LinkService;
use bulk_shortener::infrastructure::persistence::InMemoryLinkRepository;
use bulk_shortener::routes::{app_router, router};
use bulk_shortener::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:8080";

/// Builds state around a fresh, empty store.
pub fn create_test_state() -> AppState {
    create_test_state_with_batch_limit(1000)
}

pub fn create_test_state_with_batch_limit(max_batch_size: usize) -> AppState {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repo, BASE_URL));
    AppState::new(link_service, max_batch_size)
}

pub fn create_test_app(state: AppState) -> Router {
    router(state)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_app(state)).unwrap()
}

/// Serves the full application stack, including trailing-slash normalization.
pub fn create_full_test_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}

/// Extracts the short code from a short URL produced by the service.
pub fn code_of(short_url: &str) -> &str {
    short_url
        .strip_prefix(BASE_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap()
}
