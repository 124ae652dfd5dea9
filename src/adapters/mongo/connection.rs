//! MongoDB client construction and reachability checks.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::time::Duration;
use thiserror::Error;

const APP_NAME: &str = "dev-profiles";

/// Errors that make the database connection unusable at startup.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("invalid MongoDB connection string: {0}")]
    InvalidOptions(#[source] mongodb::error::Error),

    #[error("unable to create MongoDB client: {0}")]
    Client(#[source] mongodb::error::Error),

    #[error("ping failed: {0}")]
    Ping(#[source] mongodb::error::Error),

    #[error("ping timed out after {0:?}")]
    Timeout(Duration),
}

/// Build a client for `uri` and verify the cluster answers a ping within `timeout`.
///
/// This is the only place a deadline is applied to database traffic.
pub async fn connect_client(uri: &str, timeout: Duration) -> Result<Client, ConnectError> {
    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(ConnectError::InvalidOptions)?;
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);
    options.app_name.get_or_insert_with(|| APP_NAME.to_string());

    let client = Client::with_options(options).map_err(ConnectError::Client)?;

    match tokio::time::timeout(timeout, ping(&client)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(ConnectError::Ping(e)),
        Err(_) => return Err(ConnectError::Timeout(timeout)),
    }

    tracing::info!("connected to MongoDB");
    Ok(client)
}

/// Run the `ping` admin command.
pub async fn ping(client: &Client) -> Result<(), mongodb::error::Error> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}
