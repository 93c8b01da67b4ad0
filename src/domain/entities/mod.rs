//! Core domain entities.
//!
//! - [`Link`] - A stored short code to URL mapping
//! - [`NewLink`] - Input for creating a link
//! - [`ShortCode`] - The identifier handed out to clients

pub mod link;
pub mod short_code;

pub use link::{Link, NewLink};
pub use short_code::ShortCode;
