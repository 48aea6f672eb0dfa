use crate::models::Item;
use super::{ApiClient, FetchResult};

/// `GET items/{inventoryId}/all`
pub async fn get_items_from_inventory(client: &ApiClient, inventory_id: &str) -> FetchResult<Vec<Item>> {
    client.get_json(&["items", inventory_id, "all"]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::tests::client_for;

    #[tokio::test]
    async fn test_get_items_from_inventory() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/items/1/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "i1",
                "inventoryId": "1",
                "invNumber": "LAP-2025-00001",
                "data": {"brand": "Lenovo"},
                "createdAt": "2025-08-21T09:00:00Z"
            }])))
            .expect(1)
            .mount(&server)
            .await;
        let items = get_items_from_inventory(&client_for(&server), "1").await.unwrap();
        assert_eq!(items[0].inv_number, "LAP-2025-00001");
        assert_eq!(items[0].data["brand"], "Lenovo");
    }
}
