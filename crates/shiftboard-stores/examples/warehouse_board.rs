//! Warehouse board walkthrough (in-memory store)

use std::sync::Arc;

use shiftboard_core::prelude::*;
use shiftboard_stores::InMemorySheetStore;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .compact()
        .init();

    let catalog = TaskCatalog::warehouse_default();
    let store = Arc::new(InMemorySheetStore::seeded(&catalog));
    let board = TaskBoard::new(store, catalog);

    let found = board
        .update(
            "Putaway 3002",
            TaskInputs {
                urgency: 8,
                importance: 9,
                days_until_due: 1,
                quantity: 10,
            },
        )
        .await?;
    info!(found, "update applied");

    for record in board.load().await {
        if record.quantity > 0 {
            info!(
                task = %record.name,
                priority = record.priority,
                people_needed = record.people_needed,
                "active task"
            );
        }
    }

    board.reset().await?;
    info!("board reset to baseline");

    Ok(())
}
