//! Field Definition Endpoints

use crate::models::{CreateField, Field};
use super::{ApiClient, FetchResult};

/// `GET fields/{inventoryId}/all`
pub async fn get_fields_from_inventory(client: &ApiClient, inventory_id: &str) -> FetchResult<Vec<Field>> {
    client.get_json(&["fields", inventory_id, "all"]).await
}

/// `POST fields/many`
pub async fn create_fields(client: &ApiClient, data: &[CreateField]) -> FetchResult<Vec<Field>> {
    client.post_json(&["fields", "many"], data).await
}
