//! In-memory implementation of `ItemRepository`.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use catalog_registry::RepositoryError;
use catalog_types::{Item, ItemId};

/// Collection and id counter, always mutated together under one lock.
#[derive(Debug)]
pub(crate) struct StoreState {
    pub(crate) items: Vec<Item>,
    pub(crate) next_id: u64,
}

impl StoreState {
    /// Takes the next id. The counter never goes backwards.
    ///
    /// The counter is left untouched when the id space is exhausted.
    pub(crate) fn allocate_id(&mut self) -> Result<ItemId, RepositoryError> {
        let id = ItemId::new(self.next_id);
        self.next_id = next_after(id)?;
        Ok(id)
    }

    pub(crate) fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// The id following `id`, or `Storage` when `u64` is exhausted.
fn next_after(id: ItemId) -> Result<u64, RepositoryError> {
    id.get()
        .checked_add(1)
        .ok_or_else(|| RepositoryError::Storage {
            message: format!("id space exhausted after {id}"),
        })
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

/// Item repository held entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    state: Mutex<StoreState>,
}

impl InMemoryItemRepository {
    /// Creates an empty repository. The first assigned id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `items`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if two seed items share an id.
    pub fn with_items(items: Vec<Item>) -> Result<Self, RepositoryError> {
        let repo = Self::new();
        repo.seed(items)?;
        Ok(repo)
    }

    /// Inserts items that already carry an id, keeping their order.
    ///
    /// The batch is all-or-nothing. Afterwards the id counter sits above the
    /// highest id present, so later inserts cannot collide with seeded items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if any id is already stored or is
    /// repeated within the batch, and `RepositoryError::Storage` if the
    /// highest seeded id leaves no room for further ids.
    pub fn seed(&self, items: Vec<Item>) -> Result<(), RepositoryError> {
        let mut state = self.lock_state()?;
        let mut seen: HashSet<ItemId> = state.items.iter().map(|item| item.id).collect();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(RepositoryError::Conflict {
                    message: format!("item already exists: {}", item.id),
                });
            }
        }
        let next_id = match items.iter().map(|item| item.id).max() {
            Some(max) => state.next_id.max(next_after(max)?),
            None => state.next_id,
        };
        state.next_id = next_id;
        tracing::debug!(count = items.len(), "seeded item repository");
        state.items.extend(items);
        Ok(())
    }

    /// Number of items currently stored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the lock is poisoned.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock_state()?.items.len())
    }

    /// Returns true when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.lock_state()?.items.is_empty())
    }

    /// Acquires the store lock.
    pub(crate) fn lock_state(&self) -> Result<MutexGuard<'_, StoreState>, RepositoryError> {
        self.state.lock().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_registry::ItemRepository;
    use catalog_types::NewItem;

    fn seeded(id: u64, name: &str) -> Item {
        NewItem::new(name, "CategoryA", true).into_item(ItemId::new(id))
    }

    #[test]
    fn new_repository_is_empty() {
        let repo = InMemoryItemRepository::new();
        assert_eq!(repo.len().expect("len"), 0);
        assert!(repo.is_empty().expect("is_empty"));
    }

    #[test]
    fn allocate_id_is_monotonic() {
        let mut state = StoreState::default();
        assert_eq!(state.allocate_id().expect("id"), ItemId::new(1));
        assert_eq!(state.allocate_id().expect("id"), ItemId::new(2));
        assert_eq!(state.next_id, 3);
    }

    #[test]
    fn allocate_id_reports_exhaustion_without_wrapping() {
        let mut state = StoreState {
            items: Vec::new(),
            next_id: u64::MAX,
        };
        let err = state.allocate_id();
        assert!(matches!(err, Err(RepositoryError::Storage { .. })));
        assert_eq!(state.next_id, u64::MAX);
    }

    #[test]
    fn seed_with_max_id_is_rejected_without_side_effects() {
        let repo = InMemoryItemRepository::with_items(vec![seeded(1, "a")]).expect("seed");
        let err = repo.seed(vec![seeded(2, "b"), seeded(u64::MAX, "c")]);
        assert!(matches!(err, Err(RepositoryError::Storage { .. })));
        assert_eq!(repo.len().expect("len"), 1);
        assert_eq!(repo.lock_state().expect("lock").next_id, 2);
    }

    #[tokio::test]
    async fn insert_after_last_id_fails_and_store_stays_usable() {
        let repo =
            InMemoryItemRepository::with_items(vec![seeded(u64::MAX - 1, "a")]).expect("seed");
        let err = repo.insert(NewItem::new("b", "c", true)).await;
        assert!(matches!(err, Err(RepositoryError::Storage { .. })));

        assert_eq!(repo.len().expect("len"), 1);
        let all = repo.list_all().await.expect("list");
        assert_eq!(all[0].id, ItemId::new(u64::MAX - 1));
    }

    #[test]
    fn poisoned_lock_surfaces_as_storage_error() {
        let repo = InMemoryItemRepository::new();
        std::thread::scope(|s| {
            let handle = s.spawn(|| {
                let _guard = repo.state.lock().expect("lock");
                panic!("poison the store");
            });
            assert!(handle.join().is_err());
        });

        assert!(matches!(repo.len(), Err(RepositoryError::Storage { .. })));
        let err = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(repo.insert(NewItem::new("a", "b", true)));
        assert!(matches!(err, Err(RepositoryError::Storage { .. })));
    }

    #[test]
    fn seed_raises_counter_past_max_id() {
        let repo =
            InMemoryItemRepository::with_items(vec![seeded(7, "a"), seeded(3, "b")]).expect("seed");
        let state = repo.lock_state().expect("lock");
        assert_eq!(state.next_id, 8);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].id, ItemId::new(7));
    }

    #[test]
    fn seed_rejects_duplicate_within_batch() {
        let repo = InMemoryItemRepository::new();
        let err = repo.seed(vec![seeded(1, "a"), seeded(1, "b")]);
        assert!(matches!(err, Err(RepositoryError::Conflict { .. })));
        assert_eq!(repo.len().expect("len"), 0);
    }

    #[test]
    fn seed_rejects_existing_id_without_partial_insert() {
        let repo = InMemoryItemRepository::with_items(vec![seeded(1, "a")]).expect("seed");
        let err = repo.seed(vec![seeded(2, "b"), seeded(1, "c")]);
        assert!(matches!(err, Err(RepositoryError::Conflict { .. })));
        assert_eq!(repo.len().expect("len"), 1);
    }

    #[test]
    fn seed_never_lowers_counter() {
        let repo = InMemoryItemRepository::with_items(vec![seeded(10, "a")]).expect("seed");
        repo.seed(vec![seeded(2, "b")]).expect("second seed");
        assert_eq!(repo.lock_state().expect("lock").next_id, 11);
    }
}
