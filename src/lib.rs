pub mod modules;
pub mod shared;

use modules::items::{
    BatchEngine, InMemoryItemRepository, Item, ItemCommands, ItemRepository, ItemService,
    ItemStatus, LogFailureReporter,
};
use shared::utils::init_logger;
use shared::{PoolConfig, WorkerPool};
use std::sync::Arc;

pub fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    // One pool for the whole process, handed to everything that needs it
    let config = PoolConfig::from_env()?;
    let runtime = config.build_runtime()?;
    let pool = WorkerPool::new(runtime.handle().clone());

    let store = InMemoryItemRepository::with_items(demo_items())?;
    log_info!("Seeded store with {} items", store.len());
    let repository: Arc<dyn ItemRepository> = Arc::new(store);
    let service = Arc::new(ItemService::new(Arc::clone(&repository), pool.clone()));
    let engine = Arc::new(BatchEngine::new(
        repository,
        pool,
        Arc::new(LogFailureReporter),
    ));
    let commands = ItemCommands::new(service, engine);

    let response = runtime.block_on(commands.process_items());
    println!("{}", serde_json::to_string_pretty(&response)?);

    runtime.shutdown_background();
    Ok(())
}

fn demo_items() -> Vec<Item> {
    (1..=5)
        .map(|n| {
            Item::new(
                format!("Item{}", n),
                format!("Demo item {}", n),
                format!("item{}@example.com", n),
            )
            .with_status(ItemStatus::Pending)
        })
        .collect()
}
