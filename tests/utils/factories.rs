/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use itemflow_lib::modules::items::{Item, ItemId, ItemStatus};

pub struct ItemFactory {
    id: Option<ItemId>,
    name: String,
    description: String,
    status: ItemStatus,
    email: String,
}

impl Default for ItemFactory {
    fn default() -> Self {
        Self {
            id: None,
            name: "Test".to_string(),
            description: "Desc".to_string(),
            status: ItemStatus::Pending,
            email: "test@test.com".to_string(),
        }
    }
}

impl ItemFactory {
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self.name = format!("Item{}", id);
        self
    }

    pub fn build(self) -> Item {
        Item {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status,
            email: self.email,
        }
    }

    /// Pending items with the given IDs
    pub fn batch(ids: &[ItemId]) -> Vec<Item> {
        ids.iter()
            .map(|&id| Self::pending().with_id(id).build())
            .collect()
    }
}
