pub mod repository;

pub use repository::InMemoryItemRepository;
