use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::config::ApiConfig;
use slotbook_store::SlotStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Build the slot store
    let store = if config.seed_slots {
        SlotStore::seeded()
    } else {
        SlotStore::new()
    };

    // Start API server
    slotbook_api::start_server(config, store).await?;

    Ok(())
}
