use crate::errors::InternalError;
use crate::stores::ItemStore;
use crate::types::internal::item::ItemDraft;

/// Starter catalog inserted when seeding is enabled
pub fn seed_items() -> Vec<ItemDraft> {
    vec![
        ItemDraft::new("Laptop", 999.99).with_description("High-performance laptop"),
        ItemDraft::new("Mouse", 29.99).with_description("Wireless optical mouse"),
        ItemDraft::new("Keyboard", 79.99).with_description("Mechanical keyboard"),
    ]
}

/// Insert the seed items if the store holds no items yet
///
/// Seeding a non-empty store is skipped so restarts against a persistent
/// database do not duplicate rows.
///
/// # Returns
/// * `Ok(n)` - Number of items inserted (0 when skipped)
/// * `Err(InternalError)` - Store failure
pub async fn seed_if_empty(store: &dyn ItemStore) -> Result<usize, InternalError> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::info!("Skipping seed data, store already holds {} items", existing);
        return Ok(0);
    }

    let drafts = seed_items();
    let total = drafts.len();
    for draft in drafts {
        store.create(draft).await?;
    }

    tracing::info!("Seeded {} items", total);
    Ok(total)
}
