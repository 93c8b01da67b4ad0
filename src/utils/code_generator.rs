//! Short code generation.
//!
//! Codes are drawn from the operating system's CSPRNG so they cannot be
//! predicted or enumerated from previously issued codes.

use crate::domain::entities::ShortCode;
use crate::domain::entities::short_code::CODE_LENGTH_BYTES;

/// The system random source could not produce bytes.
#[derive(Debug, thiserror::Error)]
#[error("Random source unavailable: {0}")]
pub struct GenerationError(String);

/// Generates a cryptographically secure random short code.
///
/// Produces a 6-character lowercase hex code from 3 random bytes. Uniqueness is
/// not checked here; the link service retries against the store on collision.
///
/// # Errors
///
/// Returns [`GenerationError`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.as_str().len(), 6);
/// ```
pub fn generate_code() -> Result<ShortCode, GenerationError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| GenerationError(e.to_string()))?;

    Ok(ShortCode::from_bytes(buffer))
}
