use crate::log_debug;
use crate::modules::items::domain::{
    ItemId, ItemRepository, ItemStatus, Outcome, ProcessingError,
};

/// Process one item: fetch it, mark it processed, persist it.
///
/// Runs on a blocking pool thread. Never retries and never looks at any
/// other item; every error ends up inside the returned `Outcome`.
pub fn process_item(repository: &dyn ItemRepository, id: ItemId) -> Outcome {
    let item = match repository.find_by_id(id) {
        Some(item) => item,
        None => return Outcome::failure(ProcessingError::NotFound(id)),
    };

    match repository.save(item.with_status(ItemStatus::Processed)) {
        Ok(saved) => {
            log_debug!("Item {} processed", id);
            Outcome::Success(saved)
        }
        Err(cause) => Outcome::failure(ProcessingError::Persistence { id, cause }),
    }
}
