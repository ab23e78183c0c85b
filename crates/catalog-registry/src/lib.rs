//! # catalog-registry
//!
//! Port definitions (abstract traits) for the item repository.
//! Adapter crates implement these traits.

pub mod query;
pub mod repository;

pub use query::ItemQuery;
pub use repository::{ItemRepository, RepositoryError};
