/// Terminal results of batch processing tasks
use super::entities::{Item, ItemId};
use crate::shared::errors::AppError;
use thiserror::Error;

/// Why a single item could not be processed. Always local to one item.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Item {0} not found")]
    NotFound(ItemId),

    #[error("Failed to persist item {id}: {cause}")]
    Persistence {
        id: ItemId,
        #[source]
        cause: AppError,
    },

    #[error("Processing of item {id} panicked: {message}")]
    Panicked { id: ItemId, message: String },
}

impl ProcessingError {
    pub fn item_id(&self) -> ItemId {
        match self {
            ProcessingError::NotFound(id) => *id,
            ProcessingError::Persistence { id, .. } => *id,
            ProcessingError::Panicked { id, .. } => *id,
        }
    }
}

/// What one processing task ended with
#[derive(Debug)]
pub enum Outcome {
    Success(Item),
    Failure { id: ItemId, cause: ProcessingError },
}

impl Outcome {
    pub fn failure(cause: ProcessingError) -> Self {
        Outcome::Failure {
            id: cause.item_id(),
            cause,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}
