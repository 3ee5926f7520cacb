//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service layer handles validation, business rules, and orchestrates
/// repository operations.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item, assigning it a fresh id
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        self.repository.insert(Item::new(input)).await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// List all items
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Replace every field of an existing item except its id.
    ///
    /// Never inserts: an unknown id is a NotFound error.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let mut item = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))?;
        item.apply_update(input);

        // The item can disappear between the read and the replace
        if !self.repository.replace(&item).await? {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(item_id = %id, "Item updated successfully");
        Ok(item)
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid) -> ItemResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ItemError::NotFound(id));
        }
        Ok(())
    }

    /// Items whose name contains the keyword, case-insensitive.
    /// An empty keyword matches every item.
    #[instrument(skip(self))]
    pub async fn search_items(&self, keyword: &str) -> ItemResult<Vec<Item>> {
        self.repository.find_by_name_containing(keyword).await
    }

    /// Items priced within [min, max], inclusive on both ends.
    /// An inverted range is empty, not an error.
    #[instrument(skip(self))]
    pub async fn items_in_price_range(&self, min: f64, max: f64) -> ItemResult<Vec<Item>> {
        if min > max {
            return Ok(Vec::new());
        }
        self.repository.find_by_price_range(min, max).await
    }

    /// Items with inventory count strictly greater than the threshold
    #[instrument(skip(self))]
    pub async fn items_with_inventory_above(&self, count: i32) -> ItemResult<Vec<Item>> {
        self.repository.find_by_inventory_greater_than(count).await
    }

    /// First item carrying the given UPC. UPCs are not unique, so with
    /// duplicates this is the first match in store-native order.
    #[instrument(skip(self))]
    pub async fn get_item_by_upc(&self, upc: &str) -> ItemResult<Item> {
        self.repository
            .find_first_by_upc(upc)
            .await?
            .ok_or_else(|| ItemError::UpcNotFound(upc.to_string()))
    }

    /// Set an item's inventory count to an absolute value
    #[instrument(skip(self))]
    pub async fn set_inventory_count(&self, id: Uuid, count: i32) -> ItemResult<Item> {
        if count < 0 {
            return Err(ItemError::Validation(
                "Inventory count must be zero or positive".to_string(),
            ));
        }

        let mut item = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))?;
        item.inventory_count = count;

        if !self.repository.replace(&item).await? {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(item_id = %id, count, "Inventory count updated");
        Ok(item)
    }

    /// Total number of stored items
    #[instrument(skip(self))]
    pub async fn count_items(&self) -> ItemResult<u64> {
        self.repository.count().await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use mockall::predicate::eq;

    fn sample_item() -> Item {
        Item {
            id: Uuid::now_v7(),
            name: "Wireless Mouse".to_string(),
            description: "A high-quality wireless mouse".to_string(),
            price: 29.99,
            image_url: None,
            upc: "123456789012".to_string(),
            inventory_count: 100,
        }
    }

    fn sample_create() -> CreateItem {
        CreateItem {
            name: "Wireless Mouse".to_string(),
            description: "A high-quality wireless mouse".to_string(),
            price: 29.99,
            image_url: None,
            upc: "123456789012".to_string(),
            inventory_count: 100,
        }
    }

    fn sample_update() -> UpdateItem {
        UpdateItem {
            name: "Ergonomic Mouse".to_string(),
            description: String::new(),
            price: 39.99,
            image_url: None,
            upc: "999999999999".to_string(),
            inventory_count: 5,
        }
    }

    #[tokio::test]
    async fn test_create_item_assigns_id_and_inserts() {
        let mut repo = MockItemRepository::new();
        repo.expect_insert().returning(|item| Ok(item));

        let service = ItemService::new(repo);
        let created = service.create_item(sample_create()).await.unwrap();

        assert_eq!(created.name, "Wireless Mouse");
        assert!(!created.id.is_nil());
    }

    #[tokio::test]
    async fn test_create_item_rejects_invalid_input_without_store_access() {
        let repo = MockItemRepository::new();
        let service = ItemService::new(repo);

        let input = CreateItem {
            upc: "bad".to_string(),
            ..sample_create()
        };
        let err = service.create_item(input).await.unwrap_err();
        assert!(matches!(err, ItemError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_item_found() {
        let item = sample_item();
        let id = item.id;
        let returned = item.clone();

        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(returned.clone())));

        let service = ItemService::new(repo);
        assert_eq!(service.get_item(id).await.unwrap(), item);
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let id = Uuid::now_v7();
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ItemService::new(repo);
        let err = service.get_item(id).await.unwrap_err();
        assert!(matches!(err, ItemError::NotFound(found) if found == id));
    }

    #[tokio::test]
    async fn test_update_item_overwrites_all_fields_and_keeps_id() {
        let item = sample_item();
        let id = item.id;
        let existing = item.clone();

        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_replace().returning(|_| Ok(true));

        let service = ItemService::new(repo);
        let updated = service.update_item(id, sample_update()).await.unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Ergonomic Mouse");
        assert_eq!(updated.description, "");
        assert_eq!(updated.inventory_count, 5);
    }

    #[tokio::test]
    async fn test_update_item_unknown_id_is_not_found_and_never_inserts() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_replace().never();
        repo.expect_insert().never();

        let service = ItemService::new(repo);
        let err = service
            .update_item(Uuid::now_v7(), sample_update())
            .await
            .unwrap_err();
        assert!(matches!(err, ItemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_item_not_found_when_replaced_under_us() {
        let item = sample_item();
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(item.clone())));
        repo.expect_replace().returning(|_| Ok(false));

        let service = ItemService::new(repo);
        let err = service
            .update_item(Uuid::now_v7(), sample_update())
            .await
            .unwrap_err();
        assert!(matches!(err, ItemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_item_succeeds() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete().returning(|_| Ok(true));

        let service = ItemService::new(repo);
        assert!(service.delete_item(Uuid::now_v7()).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_item_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = ItemService::new(repo);
        let err = service.delete_item(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, ItemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_search_items_passes_keyword_through() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_name_containing()
            .with(eq("mouse"))
            .returning(|_| Ok(vec![]));

        let service = ItemService::new(repo);
        assert!(service.search_items("mouse").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inverted_price_range_is_empty_without_store_access() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_price_range().never();

        let service = ItemService::new(repo);
        let items = service.items_in_price_range(50.0, 10.0).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_price_range_with_equal_bounds_hits_store() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_price_range()
            .with(eq(10.0), eq(10.0))
            .returning(|_, _| Ok(vec![]));

        let service = ItemService::new(repo);
        assert!(service
            .items_in_price_range(10.0, 10.0)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_item_by_upc_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_first_by_upc().returning(|_| Ok(None));

        let service = ItemService::new(repo);
        let err = service.get_item_by_upc("123456789012").await.unwrap_err();
        assert!(matches!(err, ItemError::UpcNotFound(_)));
    }

    #[tokio::test]
    async fn test_set_inventory_count_rejects_negative_without_store_access() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().never();
        repo.expect_replace().never();

        let service = ItemService::new(repo);
        let err = service
            .set_inventory_count(Uuid::now_v7(), -1)
            .await
            .unwrap_err();
        assert!(matches!(err, ItemError::Validation(_)));
    }

    #[tokio::test]
    async fn test_set_inventory_count_updates_item() {
        let item = sample_item();
        let id = item.id;

        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(item.clone())));
        repo.expect_replace().returning(|_| Ok(true));

        let service = ItemService::new(repo);
        let updated = service.set_inventory_count(id, 0).await.unwrap();
        assert_eq!(updated.inventory_count, 0);
        assert_eq!(updated.id, id);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_store_error() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(ItemError::Store("connection reset".to_string())));

        let service = ItemService::new(repo);
        let err = service.get_item(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, ItemError::Store(_)));
    }
}
