//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use super::ShortCode;

/// A stored mapping between a short code and the original URL.
///
/// Links are immutable once created and live until the process exits.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: ShortCode,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: ShortCode, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            long_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: ShortCode,
    pub long_url: String,
}

impl NewLink {
    /// Stamps the creation time and turns the input into a stored link.
    pub fn into_link(self) -> Link {
        Link::new(self.code, self.long_url, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let code = ShortCode::parse("abc123").unwrap();
        let link = Link::new(code.clone(), "https://example.com".to_string(), now);

        assert_eq!(link.code, code);
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_link_into_link() {
        let before = Utc::now();
        let new_link = NewLink {
            code: ShortCode::parse("0f0f0f").unwrap(),
            long_url: "https://rust-lang.org".to_string(),
        };

        let link = new_link.into_link();

        assert_eq!(link.code.as_str(), "0f0f0f");
        assert_eq!(link.long_url, "https://rust-lang.org");
        assert!(link.created_at >= before);
    }
}
