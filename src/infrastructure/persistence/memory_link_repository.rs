//! In-memory implementation of link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// In-memory repository keyed by short code.
///
/// Backed by a [`DashMap`], whose sharded locks let lookups and inserts on
/// different shards proceed in parallel. Inserts go through the entry API, so
/// the presence check and the write happen under the same shard lock.
///
/// Contents live for the lifetime of the value; construct a fresh repository
/// to start from an empty store.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, Link>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.code.as_str().to_owned()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": new_link.code.as_str() }),
            )),
            Entry::Vacant(slot) => {
                let link = new_link.into_link();
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortCode;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn new_link(code: &str, url: &str) -> NewLink {
        NewLink {
            code: ShortCode::parse(code).unwrap(),
            long_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryLinkRepository::new();

        let link = repo
            .create(new_link("abc123", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(link.code.as_str(), "abc123");

        let found = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found.long_url, "https://example.com");
        assert_eq!(found.created_at, link.created_at);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = InMemoryLinkRepository::new();
        assert!(repo.find_by_code("abc123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_code_conflicts() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("abc123", "https://first.com"))
            .await
            .unwrap();

        let result = repo.create(new_link("abc123", "https://second.com")).await;
        assert!(matches!(result, Err(AppError::Conflict { .. })));

        // The original mapping is untouched.
        let found = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found.long_url, "https://first.com");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fresh_repository_is_empty() {
        let repo = InMemoryLinkRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_create_same_code_has_single_winner() {
        let repo = Arc::new(InMemoryLinkRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(new_link("c0ffee", &format!("https://example.com/{i}")))
                        .await
                        .is_ok()
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_create_distinct_codes() {
        let repo = Arc::new(InMemoryLinkRepository::new());

        let handles: Vec<_> = (0..16u8)
            .map(|task| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    for i in 0..=255u8 {
                        let code = format!("{task:02x}{i:02x}00");
                        repo.create(new_link(&code, "https://example.com"))
                            .await
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 16 * 256);

        let mut seen = HashSet::new();
        for entry in repo.links.iter() {
            assert!(seen.insert(entry.key().clone()));
        }
    }
}
