//! Batch shortening of submitted URLs.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::application::services::LinkService;
use crate::domain::entities::ShortCode;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::url_validator::{ValidUrl, validate_url};

/// Default upper bound on URLs per batch.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// Outcome for one URL of a batch.
#[derive(Debug, Clone)]
pub struct ShortenedUrl {
    /// The URL as stored and redirected to (surrounding whitespace trimmed).
    pub original: String,
    pub code: ShortCode,
    pub short_url: String,
}

/// Service shortening a batch of URLs submitted together.
///
/// # Batch Policy
///
/// The whole batch is validated before anything is stored. A single invalid
/// URL rejects the request and leaves the store untouched. Valid batches are
/// then inserted in input order, one link per entry, duplicates included.
pub struct ShortenService<L: LinkRepository> {
    link_service: Arc<LinkService<L>>,
    max_batch_size: usize,
}

impl<L: LinkRepository> ShortenService<L> {
    /// Creates a new batch service on top of a link service.
    pub fn new(link_service: Arc<LinkService<L>>) -> Self {
        Self {
            link_service,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }

    /// Overrides the maximum number of URLs accepted in one batch.
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    /// Shortens every URL in `urls`, returning results in input order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - The batch is empty
    /// - The batch exceeds the configured maximum size
    /// - Any URL fails validation (details name the offending index)
    ///
    /// Returns [`AppError::Internal`] if a short code cannot be generated. Links
    /// created for earlier entries of the same batch stay stored.
    pub async fn shorten(&self, urls: Vec<String>) -> Result<Vec<ShortenedUrl>, AppError> {
        if urls.is_empty() {
            return Err(AppError::bad_request(
                "At least one URL is required",
                json!({ "field": "urls" }),
            ));
        }

        if urls.len() > self.max_batch_size {
            return Err(AppError::bad_request(
                "Too many URLs in one request",
                json!({ "provided": urls.len(), "max": self.max_batch_size }),
            ));
        }

        let validated = validate_batch(&urls)?;

        let total = urls.len();
        let mut results = Vec::with_capacity(total);

        for url in validated {
            let link = match self.link_service.create_link(url).await {
                Ok(link) => link,
                Err(e) => {
                    if !results.is_empty() {
                        warn!(
                            committed = results.len(),
                            total, "Batch aborted after partial insert"
                        );
                    }
                    return Err(e);
                }
            };

            let short_url = self.link_service.get_short_url(&link.code);
            results.push(ShortenedUrl {
                original: link.long_url,
                code: link.code,
                short_url,
            });
        }

        info!(count = total, "Shortened batch");

        Ok(results)
    }
}

/// Validates every entry, failing on the first invalid one.
fn validate_batch(urls: &[String]) -> Result<Vec<ValidUrl>, AppError> {
    urls.iter()
        .enumerate()
        .map(|(index, raw)| {
            validate_url(raw).map_err(|e| {
                AppError::bad_request(
                    "Invalid URL in batch",
                    json!({ "index": index, "url": raw, "reason": e.to_string() }),
                )
            })
        })
        .collect()
}
