use std::sync::Arc;

use tracing::{error, info};

use dev_profiles::adapters::mongo::MongoProfileStore;
use dev_profiles::config::AppConfig;
use dev_profiles::server::{self, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = AppConfig::load_validated()?;
    server::init_tracing(&config.server);

    info!(
        environment = ?config.server.environment,
        database = %config.database.name,
        collection = %config.database.collection,
        "starting dev-profiles"
    );

    let store = match MongoProfileStore::connect(&config.database).await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "failed to connect to MongoDB");
            return Err(e.into());
        }
    };
    info!("connected to MongoDB");

    server::run(&config.server, Arc::new(store)).await
}
