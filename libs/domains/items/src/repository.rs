use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::Item;

/// Repository trait for Item persistence
///
/// This trait defines the data access interface for items.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item
    async fn insert(&self, item: Item) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>>;

    /// List all items in store-native order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Replace an existing item in full, keyed by its id.
    /// Returns false when no item with that id exists (never inserts).
    async fn replace(&self, item: &Item) -> ItemResult<bool>;

    /// Delete an item by ID, reporting whether anything was removed
    async fn delete(&self, id: Uuid) -> ItemResult<bool>;

    /// Items whose name contains the keyword, case-insensitive.
    /// An empty keyword matches every item.
    async fn find_by_name_containing(&self, keyword: &str) -> ItemResult<Vec<Item>>;

    /// Items with min <= price <= max (inclusive on both ends)
    async fn find_by_price_range(&self, min: f64, max: f64) -> ItemResult<Vec<Item>>;

    /// Items with inventory count strictly greater than the threshold
    async fn find_by_inventory_greater_than(&self, count: i32) -> ItemResult<Vec<Item>>;

    /// First item carrying the given UPC, in store-native order
    async fn find_first_by_upc(&self, upc: &str) -> ItemResult<Option<Item>>;

    /// Total number of stored items
    async fn count(&self) -> ItemResult<u64>;
}
