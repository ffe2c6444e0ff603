use bson::doc;
use mongodb::{options::ClientOptions, Client, Database};
use thiserror::Error;
use tracing::info;

use crate::config::settings::Settings;

#[derive(Error, Debug)]
pub enum ConnectivityError {
    #[error("Invalid connection string")]
    InvalidUri(#[source] mongodb::error::Error),
    #[error("Could not reach the database")]
    Ping(#[source] mongodb::error::Error),
}

/// Opens a client, pings `admin` and returns the target database.
///
/// Nothing is written before the ping succeeds.
pub async fn connect(settings: &Settings) -> Result<Database, ConnectivityError> {
    let options = ClientOptions::parse(&settings.mongo_url)
        .await
        .map_err(ConnectivityError::InvalidUri)?;
    let client = Client::with_options(options).map_err(ConnectivityError::InvalidUri)?;

    ping(&client).await?;
    info!(database = %settings.database_name, "Connected to MongoDB");

    Ok(client.database(&settings.database_name))
}

pub async fn ping(client: &Client) -> Result<(), ConnectivityError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(ConnectivityError::Ping)?;
    Ok(())
}
