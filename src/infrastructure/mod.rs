//! Infrastructure layer implementing interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Link storage implementations

pub mod persistence;
