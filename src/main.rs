//! Reseeds the `followups` and `rewards` collections.
//!
//! Run with: COSMOS_MONGO_URL="..." cargo run
//!
//! Both collections are emptied before the fixed records are inserted.

use anyhow::Context;
use pettrack_seed::config::{database, settings::Settings};
use pettrack_seed::modules::{followup::seed::seed_followups, reward::seed::seed_rewards};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pettrack_seed=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env().context("Cannot start the seed")?;
    info!(?settings, "Loaded settings");

    let db = database::connect(&settings)
        .await
        .context("Could not connect to Cosmos DB")?;

    let followups = seed_followups(&db, &settings.followups_collection)
        .await
        .context("Seeding follow-ups failed")?;
    println!("✓ Follow-ups ready ({})", followups);

    let rewards = seed_rewards(&db, &settings.rewards_collection)
        .await
        .context("Seeding rewards failed")?;
    println!("✓ Rewards ready ({})", rewards);

    println!("\n✓ Seed data inserted into {}", settings.database_name);
    Ok(())
}
