//! Data Sources
//!
//! Pages talk to an [`InventorySource`]; the live backend and the
//! bundled sample data are interchangeable behind it.

mod sample;

use async_trait::async_trait;

use crate::api::{self, ApiClient, FetchResult};
use crate::models::{AccessEntry, CreateField, CreateInventory, Field, Inventory, Item, Numbering};

pub use sample::SampleSource;

/// Everything the pages read from or send to the backend
#[async_trait(?Send)]
pub trait InventorySource: Send + Sync {
    /// Five most popular inventories
    async fn top5(&self) -> FetchResult<Vec<Inventory>>;

    async fn all_inventories(&self) -> FetchResult<Vec<Inventory>>;

    async fn tags(&self) -> FetchResult<Vec<String>>;

    /// Inventories owned by a user
    async fn inventories_of(&self, user_id: &str) -> FetchResult<Vec<Inventory>>;

    async fn inventory(&self, id: &str) -> FetchResult<Inventory>;

    async fn create_inventory(&self, data: &CreateInventory) -> FetchResult<Inventory>;

    async fn fields(&self, inventory_id: &str) -> FetchResult<Vec<Field>>;

    /// Bulk-create field definitions
    async fn create_fields(&self, data: &[CreateField]) -> FetchResult<Vec<Field>>;

    async fn items(&self, inventory_id: &str) -> FetchResult<Vec<Item>>;

    async fn numbering(&self, inventory_id: &str) -> FetchResult<Numbering>;

    async fn access(&self, inventory_id: &str) -> FetchResult<Vec<AccessEntry>>;
}

/// Live backend over REST
pub struct HttpSource {
    client: ApiClient,
}

impl HttpSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl InventorySource for HttpSource {
    async fn top5(&self) -> FetchResult<Vec<Inventory>> {
        api::load_top5(&self.client).await
    }

    async fn all_inventories(&self) -> FetchResult<Vec<Inventory>> {
        api::load_all(&self.client).await
    }

    async fn tags(&self) -> FetchResult<Vec<String>> {
        api::load_all_tags(&self.client).await
    }

    async fn inventories_of(&self, user_id: &str) -> FetchResult<Vec<Inventory>> {
        api::load_inventories_from_user(&self.client, user_id).await
    }

    async fn inventory(&self, id: &str) -> FetchResult<Inventory> {
        api::get_inventory(&self.client, id).await
    }

    async fn create_inventory(&self, data: &CreateInventory) -> FetchResult<Inventory> {
        api::create_inventory(&self.client, data).await
    }

    async fn fields(&self, inventory_id: &str) -> FetchResult<Vec<Field>> {
        api::get_fields_from_inventory(&self.client, inventory_id).await
    }

    async fn create_fields(&self, data: &[CreateField]) -> FetchResult<Vec<Field>> {
        api::create_fields(&self.client, data).await
    }

    async fn items(&self, inventory_id: &str) -> FetchResult<Vec<Item>> {
        api::get_items_from_inventory(&self.client, inventory_id).await
    }

    async fn numbering(&self, inventory_id: &str) -> FetchResult<Numbering> {
        api::get_numbering_from_inventory(&self.client, inventory_id).await
    }

    async fn access(&self, inventory_id: &str) -> FetchResult<Vec<AccessEntry>> {
        api::get_user_access_from_inventory(&self.client, inventory_id).await
    }
}
