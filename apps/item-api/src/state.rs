//! Shared application state.

use domain_items::{ItemService, MongoItemRepository};
use mongodb::Client;

use crate::config::Config;

/// State shared by all request handlers. Cloning is cheap: the service
/// holds its repository behind an `Arc` and the Mongo client shares one
/// connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: Config,
    /// Kept for readiness pings and for closing the pool on shutdown
    pub mongo_client: Client,
    /// Items domain service, wired to its MongoDB repository
    pub items: ItemService<MongoItemRepository>,
}

impl AppState {
    /// Wire the domain service to the configured database.
    pub fn new(config: Config, mongo_client: Client) -> Self {
        let db = mongo_client.database(config.mongodb.database());
        let items = ItemService::new(MongoItemRepository::new(db));

        Self {
            config,
            mongo_client,
            items,
        }
    }
}
