//! `ItemRepository` trait implementation for `InMemoryItemRepository`.

use async_trait::async_trait;
use catalog_registry::{ItemQuery, ItemRepository, RepositoryError};
use catalog_types::{Item, ItemId, ItemPatch, NewItem};

use crate::repository::InMemoryItemRepository;

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn insert(&self, item: NewItem) -> Result<Item, RepositoryError> {
        let mut state = self.lock_state()?;
        let id = state.allocate_id()?;
        let item = item.into_item(id);
        state.items.push(item.clone());
        tracing::info!(%id, name = %item.name, "item created");
        Ok(item)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        let state = self.lock_state()?;
        Ok(state.items.iter().find(|item| item.id == id).cloned())
    }

    async fn find_all(&self, query: ItemQuery) -> Result<Vec<Item>, RepositoryError> {
        let state = self.lock_state()?;
        let items: Vec<Item> = state
            .items
            .iter()
            .filter(|item| query.matches(item))
            .cloned()
            .collect();
        tracing::debug!(?query, matched = items.len(), "item query");
        Ok(items)
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, RepositoryError> {
        let mut state = self.lock_state()?;
        let Some(index) = state.position(id) else {
            return Err(RepositoryError::NotFound { id });
        };
        let item = &mut state.items[index];
        if patch.is_empty() {
            tracing::debug!(%id, "empty patch, item unchanged");
        } else {
            patch.apply(item);
            tracing::info!(%id, "item updated");
        }
        Ok(item.clone())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        self.len()
    }

    async fn delete(&self, id: ItemId) -> Result<bool, RepositoryError> {
        let mut state = self.lock_state()?;
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        let removed = state.items.len() < before;
        tracing::info!(%id, removed, "item delete");
        Ok(removed)
    }
}
