//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, ShortenService};
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Services shared by all request handlers.
///
/// Cloning is cheap; every clone points at the same link store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub shorten_service: Arc<ShortenService<InMemoryLinkRepository>>,
}

impl AppState {
    /// Wires the batch service on top of an existing link service.
    pub fn new(
        link_service: Arc<LinkService<InMemoryLinkRepository>>,
        max_batch_size: usize,
    ) -> Self {
        let shorten_service =
            Arc::new(ShortenService::new(link_service.clone()).with_max_batch_size(max_batch_size));

        Self {
            link_service,
            shorten_service,
        }
    }

    /// Builds state around a fresh, empty link store.
    pub fn from_config(config: &Config) -> Self {
        let link_repository = Arc::new(InMemoryLinkRepository::new());
        let link_service = Arc::new(
            LinkService::new(link_repository, config.base_url.clone())
                .with_max_attempts(config.code_max_attempts),
        );

        Self::new(link_service, config.max_batch_size)
    }
}
