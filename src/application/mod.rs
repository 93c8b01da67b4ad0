//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, code generation and validation and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Single link creation and resolution
//! - [`services::shorten_service::ShortenService`] - Batch shortening of submitted URLs

pub mod services;
