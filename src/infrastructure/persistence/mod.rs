//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Process-lifetime link storage backed by a sharded map

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
