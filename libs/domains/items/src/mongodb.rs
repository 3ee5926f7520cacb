//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc, to_bson},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::Item;
use crate::repository::ItemRepository;

/// Persistence shape of an item.
///
/// Keeps the wire model free of MongoDB concerns: the id lives in `_id`
/// here but is exposed as `id` over HTTP.
#[derive(Debug, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    description: String,
    price: f64,
    image_url: Option<String>,
    upc: String,
    inventory_count: i32,
}

impl From<Item> for ItemDocument {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            image_url: item.image_url,
            upc: item.upc,
            inventory_count: item.inventory_count,
        }
    }
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            description: doc.description,
            price: doc.price,
            image_url: doc.image_url,
            upc: doc.upc,
            inventory_count: doc.inventory_count,
        }
    }
}

/// MongoDB implementation of the ItemRepository
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Create a new MongoItemRepository
    ///
    /// # Arguments
    /// * `db` - MongoDB database instance
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("mydb");
    /// let repo = MongoItemRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<ItemDocument>("items");
        Self { collection }
    }

    /// Create a new MongoItemRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<ItemDocument>(collection_name);
        Self { collection }
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }

    /// Case-insensitive substring match on the item name.
    /// The keyword is escaped so regex metacharacters match literally.
    fn name_filter(keyword: &str) -> Document {
        doc! { "name": { "$regex": regex::escape(keyword), "$options": "i" } }
    }

    fn price_range_filter(min: f64, max: f64) -> Document {
        doc! { "price": { "$gte": min, "$lte": max } }
    }

    fn inventory_filter(count: i32) -> Document {
        doc! { "inventory_count": { "$gt": count } }
    }

    async fn find_all(&self, filter: Document) -> ItemResult<Vec<Item>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(filter).await?;
        let docs: Vec<ItemDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Item::from).collect())
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn insert(&self, item: Item) -> ItemResult<Item> {
        let document = ItemDocument::from(item.clone());
        self.collection.insert_one(&document).await?;

        tracing::info!(item_id = %item.id, "Item created successfully");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let document = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(document.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        self.find_all(doc! {}).await
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn replace(&self, item: &Item) -> ItemResult<bool> {
        let document = ItemDocument::from(item.clone());
        let result = self
            .collection
            .replace_one(Self::id_filter(item.id), &document)
            .await?;

        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ItemResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!(item_id = %id, "Item deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn find_by_name_containing(&self, keyword: &str) -> ItemResult<Vec<Item>> {
        self.find_all(Self::name_filter(keyword)).await
    }

    #[instrument(skip(self))]
    async fn find_by_price_range(&self, min: f64, max: f64) -> ItemResult<Vec<Item>> {
        self.find_all(Self::price_range_filter(min, max)).await
    }

    #[instrument(skip(self))]
    async fn find_by_inventory_greater_than(&self, count: i32) -> ItemResult<Vec<Item>> {
        self.find_all(Self::inventory_filter(count)).await
    }

    #[instrument(skip(self))]
    async fn find_first_by_upc(&self, upc: &str) -> ItemResult<Option<Item>> {
        // find_one returns the first match in store-native order, which is
        // the tie-break for duplicate UPCs
        let document = self.collection.find_one(doc! { "upc": upc }).await?;
        Ok(document.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ItemResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }
}
