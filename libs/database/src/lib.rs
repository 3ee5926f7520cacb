//! MongoDB connectivity for the catalog services: configuration,
//! retrying connectors and health checks.
//!
//! Features: `mongodb` (default) enables the driver-backed connector,
//! `config` adds `core_config::FromEnv` loading for [`mongodb::MongoConfig`].
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let collection = client.database("items").collection::<Document>("items");
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;
