use clap::Parser;
use portfolio_api::{start_server, AppState, Config};
use portfolio_core::{SeedOutcome, Seeder};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenv::dotenv().ok();
    let config = Config::parse();

    let _log_guard = portfolio_api::logging::init_logging(&config.log_dir);

    info!("Starting portfolio API on {}", config.bind_addr());

    let store = config.open_store().await?;

    if config.no_seed {
        info!("Seeding disabled");
    } else {
        let content = config.seed_content()?;
        match Seeder::new(store.clone()).seed(&content).await? {
            SeedOutcome::AlreadySeeded => info!("Portfolio content already present"),
            SeedOutcome::Seeded { .. } => info!("Portfolio data initialized"),
        }
    }

    let state = AppState::new(store, config.category_allow_list());
    start_server(state, &config.bind_addr()).await?;

    info!("Store handle released, exiting");
    Ok(())
}
