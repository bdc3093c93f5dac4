pub mod entities;
pub mod outcome;
pub mod repository;

pub use entities::{Item, ItemId, ItemStatus};
pub use outcome::{Outcome, ProcessingError};
pub use repository::ItemRepository;
