//! Acceptance rules for URLs submitted for shortening.

use url::Url;

/// Schemes a short link is allowed to redirect to.
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Reasons a submitted URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must include a host")]
    MissingHost,

    #[error("Only HTTP and HTTPS protocols are allowed, got '{0}'")]
    UnsupportedProtocol(String),
}

/// A URL that passed validation.
///
/// Keeps the submitted text (minus surrounding whitespace) so a redirect
/// returns exactly what the client sent.
#[derive(Debug, Clone)]
pub struct ValidUrl {
    original: String,
}

impl ValidUrl {
    /// The URL as submitted, trimmed.
    pub fn into_string(self) -> String {
        self.original
    }
}

/// Checks that `candidate` is an absolute HTTP(S) URL with a host.
///
/// There is no length limit and a path is not required.
///
/// # Security
///
/// Rejects schemes such as `javascript:`, `data:` and `file:` so the service
/// cannot be used to mint redirects to non-web targets.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for empty or whitespace-only input
/// - [`UrlValidationError::InvalidFormat`] if the text does not parse as an absolute URL
/// - [`UrlValidationError::UnsupportedProtocol`] for schemes other than http/https
/// - [`UrlValidationError::MissingHost`] if the URL has no host
pub fn validate_url(candidate: &str) -> Result<ValidUrl, UrlValidationError> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let parsed =
        Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(UrlValidationError::UnsupportedProtocol(
            parsed.scheme().to_string(),
        ));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(ValidUrl {
        original: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        let url = validate_url("https://example.com").unwrap();
        assert_eq!(url.into_string(), "https://example.com");
    }

    #[test]
    fn test_accepts_http_with_path_and_query() {
        let url = validate_url("http://a.b/path?q=1#frag").unwrap();
        assert_eq!(url.into_string(), "http://a.b/path?q=1#frag");
    }

    #[test]
    fn test_accepts_very_long_url() {
        let long = format!("http://a.b/{}", "x".repeat(5000));
        let url = validate_url(&long).unwrap();
        assert_eq!(url.into_string(), long);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let url = validate_url("  https://example.com/a \n").unwrap();
        assert_eq!(url.into_string(), "https://example.com/a");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_url("").unwrap_err(), UrlValidationError::Empty);
    }

    #[test]
    fn test_rejects_whitespace_only() {
        assert_eq!(
            validate_url(" \t\n ").unwrap_err(),
            UrlValidationError::Empty
        );
    }

    #[test]
    fn test_rejects_not_a_url() {
        assert!(matches!(
            validate_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_ftp() {
        assert_eq!(
            validate_url("ftp://example.com").unwrap_err(),
            UrlValidationError::UnsupportedProtocol("ftp".to_string())
        );
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in [
            "javascript:alert(1)",
            "file:///etc/passwd",
            "data:text/html,<h1>hi</h1>",
            "mailto:someone@example.com",
        ] {
            assert!(
                matches!(
                    validate_url(input),
                    Err(UrlValidationError::UnsupportedProtocol(_))
                ),
                "'{}' should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_rejects_missing_host() {
        // The url crate refuses an empty host for special schemes.
        assert!(validate_url("http://").is_err());
        assert!(validate_url("https://").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = validate_url("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("HTTP and HTTPS"));
    }
}
