use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A UPC is exactly 12 decimal digits, distinct from the internal id.
static UPC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{12}$").expect("valid regex"));

/// Item entity - the product record managed by this service
///
/// Serialized over HTTP with camelCase field names:
/// `id`, `name`, `description`, `price`, `imageUrl`, `upc`, `inventoryCount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned by the store on creation (never by callers)
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// Item description
    pub description: String,
    /// Price, always >= 0
    pub price: f64,
    /// Optional product image URL
    pub image_url: Option<String>,
    /// Universal Product Code (12 digits, not guaranteed unique)
    pub upc: String,
    /// Available inventory count
    pub inventory_count: i32,
}

/// DTO for creating a new item
///
/// Carries every field except `id`; a caller-supplied id in the request
/// body is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[validate(length(min = 1, max = 200, message = "Name is mandatory"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0, message = "Price must be zero or positive"))]
    pub price: f64,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
    #[validate(regex(path = *UPC_RE, message = "UPC must be a 12-digit number"))]
    pub upc: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "Inventory count must be zero or positive"))]
    pub inventory_count: i32,
}

/// DTO for updating an existing item
///
/// An update is a full-field overwrite: every field of the stored item
/// except `id` is replaced with the corresponding field here.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 200, message = "Name is mandatory"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0, message = "Price must be zero or positive"))]
    pub price: f64,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
    #[validate(regex(path = *UPC_RE, message = "UPC must be a 12-digit number"))]
    pub upc: String,
    #[validate(range(min = 0, message = "Inventory count must be zero or positive"))]
    pub inventory_count: i32,
}

/// Query parameters for keyword search
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring to look for in item names (case-insensitive).
    /// Missing or empty matches every item.
    #[serde(default)]
    pub keyword: String,
}

/// Query parameters for the inclusive price range lookup
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeQuery {
    /// Lower bound (inclusive)
    pub min_price: f64,
    /// Upper bound (inclusive)
    pub max_price: f64,
}

/// Query parameters for setting an item's inventory count
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct InventoryCountQuery {
    /// The new inventory count
    pub count: i32,
}

impl Item {
    /// Create a new item from a CreateItem DTO, assigning a fresh id
    pub fn new(input: CreateItem) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            image_url: input.image_url,
            upc: input.upc,
            inventory_count: input.inventory_count,
        }
    }

    /// Overwrite every field except `id` from an UpdateItem DTO
    pub fn apply_update(&mut self, update: UpdateItem) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.image_url = update.image_url;
        self.upc = update.upc;
        self.inventory_count = update.inventory_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateItem {
        CreateItem {
            name: "Wireless Mouse".to_string(),
            description: "A high-quality wireless mouse".to_string(),
            price: 29.99,
            image_url: Some("http://example.com/image.jpg".to_string()),
            upc: "123456789012".to_string(),
            inventory_count: 100,
        }
    }

    #[test]
    fn test_new_assigns_fresh_ids() {
        let a = Item::new(valid_create());
        let b = Item::new(valid_create());
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Wireless Mouse");
    }

    #[test]
    fn test_apply_update_preserves_id() {
        let mut item = Item::new(valid_create());
        let id = item.id;

        item.apply_update(UpdateItem {
            name: "Ergonomic Mouse".to_string(),
            description: String::new(),
            price: 39.99,
            image_url: None,
            upc: "999999999999".to_string(),
            inventory_count: 3,
        });

        assert_eq!(item.id, id);
        assert_eq!(item.name, "Ergonomic Mouse");
        assert_eq!(item.description, "");
        assert_eq!(item.price, 39.99);
        assert_eq!(item.image_url, None);
        assert_eq!(item.upc, "999999999999");
        assert_eq!(item.inventory_count, 3);
    }

    #[test]
    fn test_create_item_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_item_rejects_blank_name() {
        let input = CreateItem {
            name: String::new(),
            ..valid_create()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_item_rejects_negative_price() {
        let input = CreateItem {
            price: -0.01,
            ..valid_create()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_item_rejects_short_upc() {
        let input = CreateItem {
            upc: "12345".to_string(),
            ..valid_create()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_item_rejects_non_numeric_upc() {
        let input = CreateItem {
            upc: "12345678901a".to_string(),
            ..valid_create()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_item_rejects_bad_url() {
        let input = CreateItem {
            image_url: Some("not a url".to_string()),
            ..valid_create()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_item_allows_missing_image_url() {
        let input = CreateItem {
            image_url: None,
            ..valid_create()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_item_rejects_negative_inventory() {
        let input = CreateItem {
            inventory_count: -1,
            ..valid_create()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_item_serializes_with_camel_case_names() {
        let item = Item::new(valid_create());
        let json = serde_json::to_value(&item).unwrap();

        assert!(json.get("id").is_some());
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("inventoryCount").is_some());
        assert!(json.get("image_url").is_none());
        assert!(json.get("inventory_count").is_none());
    }

    #[test]
    fn test_create_item_ignores_caller_supplied_id() {
        let input: CreateItem = serde_json::from_value(serde_json::json!({
            "id": "0198c0de-0000-7000-8000-000000000000",
            "name": "Mouse",
            "price": 1.0,
            "upc": "123456789012",
            "inventoryCount": 1
        }))
        .unwrap();

        // The DTO has no id field, so the posted id never reaches the store
        assert_eq!(input.name, "Mouse");
    }
}
