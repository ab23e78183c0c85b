//! Shared helpers used across CLI commands.

use std::sync::Arc;

use catalog_config::CatalogConfig;
use catalog_store_memory::InMemoryItemRepository;

/// Builds the in-memory item store, loading the configured seed items.
///
/// # Errors
///
/// Returns an error if two seed items share an id.
pub fn open_repository(config: &CatalogConfig) -> anyhow::Result<Arc<InMemoryItemRepository>> {
    let repo = InMemoryItemRepository::with_items(config.seed.clone())
        .map_err(|e| anyhow::anyhow!("seed error: {e}"))?;
    Ok(Arc::new(repo))
}
