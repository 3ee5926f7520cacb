//! Connection management and health checks for MongoDB.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{
    MongoError, connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
};
pub use health::{HealthStatus, check_health_detailed};

// Driver types callers commonly need alongside the connectors
pub use mongodb::{Client, Collection, Database};
