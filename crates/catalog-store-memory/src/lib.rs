//! # catalog-store-memory
//!
//! In-process adapter for the catalog item registry.
//! Implements `ItemRepository` over a mutex-guarded vector.

pub mod repository;
mod repository_impl;

pub use repository::InMemoryItemRepository;
