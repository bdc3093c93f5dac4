use super::application::service::ItemService;
use super::domain::{Item, ItemId, ItemStatus};
use super::processing::BatchProcessor;
use crate::shared::errors::AppError;
use crate::shared::utils::LogContext;
use crate::{log_debug, log_error};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Transport-agnostic response: a status code plus a JSON body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResponse {
    pub status: u16,
    pub body: Value,
}

impl CommandResponse {
    fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self::new(status, body),
            Err(e) => Self::from_error(AppError::from(e)),
        }
    }

    fn empty(status: u16) -> Self {
        Self::new(status, Value::Null)
    }

    fn from_error(err: AppError) -> Self {
        match err {
            AppError::InvalidFields(errors) => Self::new(STATUS_BAD_REQUEST, json!(errors)),
            AppError::NotFound(_) => Self::empty(STATUS_NOT_FOUND),
            other => {
                LogContext::error_with_context(&other, "Command failed");
                Self::new(STATUS_INTERNAL_ERROR, json!(format!("Error: {}", other)))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<ItemStatus>,
    pub email: String,
}

impl ItemRequest {
    fn into_item(self, id: Option<ItemId>) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            status: self.status.unwrap_or_default(),
            email: self.email,
        }
    }
}

/// Request/response binding over the item service and the batch engine
pub struct ItemCommands {
    service: Arc<ItemService>,
    processor: Arc<dyn BatchProcessor>,
}

impl ItemCommands {
    pub fn new(service: Arc<ItemService>, processor: Arc<dyn BatchProcessor>) -> Self {
        Self { service, processor }
    }

    pub async fn get_all_items(&self) -> CommandResponse {
        match self.service.find_all().await {
            Ok(items) => CommandResponse::json(STATUS_OK, &items),
            Err(e) => CommandResponse::from_error(e),
        }
    }

    pub async fn create_item(&self, request: ItemRequest) -> CommandResponse {
        match self.service.save(request.into_item(None)).await {
            Ok(saved) => CommandResponse::json(STATUS_CREATED, &saved),
            Err(e) => CommandResponse::from_error(e),
        }
    }

    pub async fn get_item(&self, id: ItemId) -> CommandResponse {
        match self.service.get(id).await {
            Ok(item) => CommandResponse::json(STATUS_OK, &item),
            Err(e) => CommandResponse::from_error(e),
        }
    }

    /// Replace the item stored under `id`: 400 on invalid fields, then 404
    /// when nothing is stored there.
    pub async fn update_item(&self, id: ItemId, request: ItemRequest) -> CommandResponse {
        match self.service.update(id, request.into_item(Some(id))).await {
            Ok(saved) => CommandResponse::json(STATUS_OK, &saved),
            Err(e) => CommandResponse::from_error(e),
        }
    }

    pub async fn delete_item(&self, id: ItemId) -> CommandResponse {
        match self.service.delete_by_id(id).await {
            Ok(()) => CommandResponse::empty(STATUS_NO_CONTENT),
            Err(e) => CommandResponse::from_error(e),
        }
    }

    pub async fn process_items(&self) -> CommandResponse {
        match self.processor.process_all().await {
            Ok(items) if items.is_empty() => {
                log_debug!("Batch finished without processed items");
                CommandResponse::new(STATUS_OK, json!("No items processed"))
            }
            Ok(items) => CommandResponse::json(STATUS_OK, &items),
            Err(e) => {
                log_error!("Processing failed: {}", e);
                CommandResponse::new(STATUS_INTERNAL_ERROR, json!(format!("Error: {}", e)))
            }
        }
    }
}
