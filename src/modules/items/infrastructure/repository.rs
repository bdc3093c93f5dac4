/// In-memory implementation of ItemRepository
///
/// Backed by a concurrent map, safe to share across batch tasks.
use crate::modules::items::domain::{Item, ItemId, ItemRepository};
use crate::shared::errors::{AppError, AppResult};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

pub struct InMemoryItemRepository {
    items: DashMap<ItemId, Item>,
    next_id: AtomicI64,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Build a store pre-populated with `items`, assigning IDs where missing
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> AppResult<Self> {
        let repo = Self::new();
        for item in items {
            repo.insert(item)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn insert(&self, item: Item) -> AppResult<Item> {
        let id = match item.id {
            Some(id) => {
                // Keep generated IDs clear of explicitly chosen ones.
                // At i64::MAX the sequence parks there and is exhausted.
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            None => self.next_id_checked()?,
        };

        let stored = Item {
            id: Some(id),
            ..item
        };
        self.items.insert(id, stored.clone());
        Ok(stored)
    }

    fn next_id_checked(&self) -> AppResult<ItemId> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
            .map_err(|last| {
                AppError::DatabaseError(format!("Item ID sequence exhausted at {}", last))
            })
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn find_all(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.items.iter().map(|entry| entry.value().clone()).collect();
        items.sort_by_key(|item| item.id);
        items
    }

    fn find_all_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.items.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }

    fn find_by_id(&self, id: ItemId) -> Option<Item> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    fn save(&self, item: Item) -> AppResult<Item> {
        self.insert(item)
    }

    fn delete_by_id(&self, id: ItemId) -> AppResult<()> {
        self.items.remove(&id);
        Ok(())
    }
}
