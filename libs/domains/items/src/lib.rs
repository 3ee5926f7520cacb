//! Catalog item domain: entities, persistence and the HTTP surface for
//! items carrying a price, image URL, UPC and inventory count.
//!
//! The layers stack the usual way, with each depending only on the one
//! below it:
//!
//! ```text
//! handlers   HTTP endpoints under /items
//!    │
//! service    business rules, overwrite semantics, inventory guards
//!    │
//! repository ItemRepository trait, backed by MongoItemRepository
//!    │
//! models     Item entity plus the CreateItem/UpdateItem DTOs
//! ```
//!
//! Wiring a router from a live database:
//!
//! ```rust,no_run
//! use domain_items::{handlers, mongodb::MongoItemRepository, service::ItemService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoItemRepository::new(client.database("items"));
//! let router = handlers::router(ItemService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, UpdateItem};
pub use mongodb::MongoItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
