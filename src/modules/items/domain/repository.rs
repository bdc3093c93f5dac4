/// Repository trait for item persistence
///
/// Calls are synchronous and may block on I/O. Async callers go through
/// `WorkerPool` so a slow store never stalls a runtime worker.
use super::entities::{Item, ItemId};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait ItemRepository: Send + Sync {
    /// All stored items
    fn find_all(&self) -> Vec<Item>;

    /// Identifiers of every stored item
    fn find_all_ids(&self) -> Vec<ItemId>;

    /// Get item by ID
    fn find_by_id(&self, id: ItemId) -> Option<Item>;

    /// Insert or update; assigns an ID when the item has none
    fn save(&self, item: Item) -> AppResult<Item>;

    /// Delete by ID; deleting a missing item is not an error
    fn delete_by_id(&self, id: ItemId) -> AppResult<()>;
}
