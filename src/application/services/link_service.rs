//! Link creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::entities::{Link, NewLink, ShortCode};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::ValidUrl;

/// Default number of code generation attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short links.
///
/// Pairs freshly generated codes with validated URLs and relies on the
/// repository's atomic insert-if-absent to keep codes unique, retrying on
/// collision a bounded number of times.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
    max_attempts: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the externally visible prefix of every short URL, e.g.
    /// `http://localhost:8080`.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the number of generation attempts per link (minimum 1).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Stores `url` under a newly generated short code.
    ///
    /// # Code Generation
    ///
    /// - Draws a random code and asks the repository to insert it if absent
    /// - On [`AppError::Conflict`] draws a new code and tries again
    /// - Gives up after `max_attempts` collisions
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the random source fails or every
    /// attempt collided.
    pub async fn create_link(&self, url: ValidUrl) -> Result<Link, AppError> {
        let long_url = url.into_string();

        for attempt in 1..=self.max_attempts {
            let code = generate_code().map_err(|e| {
                error!("Short code generation failed: {}", e);
                AppError::internal(
                    "Failed to generate short code",
                    json!({ "reason": e.to_string() }),
                )
            })?;

            let new_link = NewLink {
                code,
                long_url: long_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    debug!(code = %link.code, attempt, "Created short link");
                    return Ok(link);
                }
                Err(AppError::Conflict { details, .. }) => {
                    warn!(attempt, %details, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            attempts = self.max_attempts,
            "Exhausted short code generation attempts"
        );
        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }

    /// Retrieves the link stored under `code`.
    ///
    /// Codes that could never have been generated are reported as not found
    /// without consulting the repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let not_found = || AppError::not_found("Short link not found", json!({ "code": code }));

        let Some(code) = ShortCode::parse(code) else {
            return Err(not_found());
        };

        self.link_repository
            .find_by_code(code.as_str())
            .await?
            .ok_or_else(not_found)
    }

    /// Constructs the full short URL for a code.
    pub fn get_short_url(&self, code: &ShortCode) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Number of links currently stored.
    pub async fn count_links(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }
}
