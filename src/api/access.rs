use crate::models::AccessEntry;
use super::{ApiClient, FetchResult};

/// `GET inventory-access/{inventoryId}/all`
pub async fn get_user_access_from_inventory(client: &ApiClient, inventory_id: &str) -> FetchResult<Vec<AccessEntry>> {
    client.get_json(&["inventory-access", inventory_id, "all"]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::tests::client_for;

    #[tokio::test]
    async fn test_get_user_access_from_inventory() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/inventory-access/4/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"user": {"id": "u-2", "name": "Bob"}}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        let access = get_user_access_from_inventory(&client_for(&server), "4").await.unwrap();
        assert_eq!(access[0].user.name, "Bob");
    }
}
