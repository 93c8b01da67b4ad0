//! # Bulk Shortener
//!
//! A bulk URL shortening service built with Axum. Clients submit a batch of
//! long URLs and receive one short URL per entry; short URLs redirect back to
//! the original with `302 Found`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the link repository trait
//! - **Application Layer** ([`application`]) - Link creation, resolution and batch shortening
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory link store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Short Codes
//!
//! Codes are 6 lowercase hex characters drawn from the OS random source.
//! Uniqueness is enforced by an atomic insert-if-absent in the store, with a
//! bounded number of regeneration attempts on collision.
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8080"
//! cargo run
//!
//! curl -X POST localhost:8080/shorten \
//!      -H 'Content-Type: application/json' \
//!      -d '{"urls": ["https://example.com"]}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ShortenService, ShortenedUrl};
    pub use crate::domain::entities::{Link, NewLink, ShortCode};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
