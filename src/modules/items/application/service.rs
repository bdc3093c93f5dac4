use crate::modules::items::domain::{Item, ItemId, ItemRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::shared::WorkerPool;
use crate::log_debug;
use std::sync::Arc;

/// CRUD access to the item store. Every store call is pushed onto the
/// worker pool's blocking threads.
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
    pool: WorkerPool,
}

impl ItemService {
    pub fn new(repository: Arc<dyn ItemRepository>, pool: WorkerPool) -> Self {
        Self { repository, pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Item>> {
        let repo = Arc::clone(&self.repository);
        self.pool.run_blocking(move || repo.find_all()).await
    }

    pub async fn find_by_id(&self, id: ItemId) -> AppResult<Option<Item>> {
        let repo = Arc::clone(&self.repository);
        self.pool.run_blocking(move || repo.find_by_id(id)).await
    }

    /// Like `find_by_id`, but a missing item is `AppError::NotFound`
    pub async fn get(&self, id: ItemId) -> AppResult<Item> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item {}", id)))
    }

    pub async fn save(&self, item: Item) -> AppResult<Item> {
        Validator::validate_item(&item.name, &item.email)?;
        self.persist(item).await
    }

    /// Replace the item stored under `id`. Field validation runs before the
    /// existence check.
    pub async fn update(&self, id: ItemId, item: Item) -> AppResult<Item> {
        Validator::validate_item(&item.name, &item.email)?;
        self.get(id).await?;

        self.persist(Item {
            id: Some(id),
            ..item
        })
        .await
    }

    pub async fn delete_by_id(&self, id: ItemId) -> AppResult<()> {
        self.get(id).await?;

        let repo = Arc::clone(&self.repository);
        self.pool.run_blocking(move || repo.delete_by_id(id)).await?
    }

    async fn persist(&self, item: Item) -> AppResult<Item> {
        let repo = Arc::clone(&self.repository);
        let saved = self.pool.run_blocking(move || repo.save(item)).await??;

        log_debug!("Saved item {:?}", saved.id);
        Ok(saved)
    }
}
