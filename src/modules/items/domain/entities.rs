/// Domain entities for the item store
///
/// Items are plain values: status changes produce a new `Item` instead of
/// mutating one in place, so concurrent batch tasks never share state.
use serde::{Deserialize, Serialize};

/// Store-assigned item identifier
pub type ItemId = i64;

/// Item lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemStatus {
    #[default]
    New,
    Pending,
    Processed,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::New => write!(f, "NEW"),
            ItemStatus::Pending => write!(f, "PENDING"),
            ItemStatus::Processed => write!(f, "PROCESSED"),
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NEW" => Ok(ItemStatus::New),
            "PENDING" => Ok(ItemStatus::Pending),
            "PROCESSED" => Ok(ItemStatus::Processed),
            _ => Err(format!("Invalid item status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Absent until the store saves the item for the first time
    #[serde(default)]
    pub id: Option<ItemId>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: ItemStatus,
    pub email: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            status: ItemStatus::New,
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    /// Copy of this item carrying `status`; `self` is left untouched.
    pub fn with_status(&self, status: ItemStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn is_processed(&self) -> bool {
        self.status == ItemStatus::Processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_status_display() {
        assert_eq!(ItemStatus::New.to_string(), "NEW");
        assert_eq!(ItemStatus::Pending.to_string(), "PENDING");
        assert_eq!(ItemStatus::Processed.to_string(), "PROCESSED");
    }

    #[test]
    fn test_item_status_from_str() {
        assert_eq!("pending".parse::<ItemStatus>().unwrap(), ItemStatus::Pending);
        assert_eq!(
            "PROCESSED".parse::<ItemStatus>().unwrap(),
            ItemStatus::Processed
        );
        assert!("done".parse::<ItemStatus>().is_err());
    }

    #[test]
    fn test_with_status_leaves_original_untouched() {
        let item = Item::new("Test", "Desc", "test@test.com").with_id(1);
        let processed = item.with_status(ItemStatus::Processed);

        assert_eq!(item.status, ItemStatus::New);
        assert!(processed.is_processed());
        assert_eq!(processed.id, Some(1));
        assert_eq!(processed.email, item.email);
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item::new("Test", "Desc", "test@test.com")
            .with_id(3)
            .with_status(ItemStatus::Pending);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["status"], "PENDING");

        let parsed: Item = serde_json::from_value(serde_json::json!({
            "name": "Fresh",
            "description": "",
            "email": "fresh@test.com"
        }))
        .unwrap();
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.status, ItemStatus::New);
    }
}
