//! Abstract repository trait (port) for item storage.

use async_trait::async_trait;
use thiserror::Error;

use catalog_types::{Item, ItemId, ItemPatch, NewItem};

use crate::query::ItemQuery;

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested item was not found.
    #[error("item not found: {id}")]
    NotFound { id: ItemId },
    /// The backing store could not be accessed.
    #[error("storage error: {message}")]
    Storage { message: String },
    /// A conflict (duplicate id, etc.).
    #[error("conflict: {message}")]
    Conflict { message: String },
}

/// Abstract trait for item persistence.
///
/// Implementations own their collection exclusively and serialize access to
/// it; every method is a single atomic operation.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Stores a new item under a freshly assigned, never reused id.
    async fn insert(&self, item: NewItem) -> Result<Item, RepositoryError>;

    /// Finds an item by id.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError>;

    /// Returns the items matching `query`, in insertion order.
    async fn find_all(&self, query: ItemQuery) -> Result<Vec<Item>, RepositoryError>;

    /// Merges `patch` into the stored item and returns the result.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has this id; the store
    /// is left untouched in that case.
    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, RepositoryError>;

    /// Deletes an item by id. Returns true if it existed.
    async fn delete(&self, id: ItemId) -> Result<bool, RepositoryError>;

    /// Number of stored items.
    ///
    /// The default counts a full listing; stores that know their size
    /// should override it.
    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.list_all().await?.len())
    }

    /// Returns every item in insertion order.
    async fn list_all(&self) -> Result<Vec<Item>, RepositoryError> {
        self.find_all(ItemQuery::all()).await
    }

    /// Returns items whose name equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, RepositoryError> {
        self.find_all(ItemQuery::all().with_name(name)).await
    }

    /// Returns items whose category equals `category` exactly.
    async fn find_by_category(&self, category: &str) -> Result<Vec<Item>, RepositoryError> {
        self.find_all(ItemQuery::all().with_category(category)).await
    }

    /// Returns items with the given availability flag.
    async fn find_by_availability(&self, available: bool) -> Result<Vec<Item>, RepositoryError> {
        self.find_all(ItemQuery::all().with_availability(available))
            .await
    }
}
