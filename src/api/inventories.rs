//! Inventory Endpoints

use crate::models::{CreateInventory, Inventory};
use super::{ApiClient, FetchResult};

/// `GET inventories/top5`
pub async fn load_top5(client: &ApiClient) -> FetchResult<Vec<Inventory>> {
    client.get_json(&["inventories", "top5"]).await
}

/// `GET inventories`
pub async fn load_all(client: &ApiClient) -> FetchResult<Vec<Inventory>> {
    client.get_json(&["inventories"]).await
}

/// `GET inventories/tags`
pub async fn load_all_tags(client: &ApiClient) -> FetchResult<Vec<String>> {
    client.get_json(&["inventories", "tags"]).await
}

/// `GET inventories/{userId}/all`
pub async fn load_inventories_from_user(client: &ApiClient, user_id: &str) -> FetchResult<Vec<Inventory>> {
    client.get_json(&["inventories", user_id, "all"]).await
}

/// `GET inventories/{id}`
pub async fn get_inventory(client: &ApiClient, id: &str) -> FetchResult<Inventory> {
    client.get_json(&["inventories", id]).await
}

/// `POST inventories/`
pub async fn create_inventory(client: &ApiClient, data: &CreateInventory) -> FetchResult<Inventory> {
    client.post_json(&["inventories", ""], data).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::tests::client_for;

    async fn mock_get(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_load_top5() {
        let server = MockServer::start().await;
        mock_get(&server, "/api/inventories/top5", json!([{"id": "3", "name": "Books", "_count": {"items": 128}}])).await;
        let top = load_top5(&client_for(&server)).await.unwrap();
        assert_eq!(top[0].item_count(), 128);
    }

    #[tokio::test]
    async fn test_load_all() {
        let server = MockServer::start().await;
        mock_get(&server, "/api/inventories", json!([{"id": "1", "name": "Laptops"}, {"id": "2", "name": "Monitors"}])).await;
        assert_eq!(load_all(&client_for(&server)).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_load_all_tags() {
        let server = MockServer::start().await;
        mock_get(&server, "/api/inventories/tags", json!(["office", "it"])).await;
        assert_eq!(load_all_tags(&client_for(&server)).await.unwrap(), vec!["office", "it"]);
    }

    #[tokio::test]
    async fn test_load_inventories_from_user() {
        let server = MockServer::start().await;
        mock_get(&server, "/api/inventories/u-1/all", json!([{"id": "1", "name": "Laptops", "ownerId": "u-1"}])).await;
        let mine = load_inventories_from_user(&client_for(&server), "u-1").await.unwrap();
        assert_eq!(mine[0].owner_id, "u-1");
    }

    #[tokio::test]
    async fn test_get_inventory() {
        let server = MockServer::start().await;
        mock_get(&server, "/api/inventories/7", json!({"id": "7", "name": "Cameras", "code": "CAM"})).await;
        assert_eq!(get_inventory(&client_for(&server), "7").await.unwrap().code, "CAM");
    }

    #[tokio::test]
    async fn test_create_inventory_posts_to_trailing_slash() {
        let server = MockServer::start().await;
        let data = CreateInventory {
            code: "TLS".to_string(),
            name: "Tools".to_string(),
            description: "Drills".to_string(),
            owner_id: "u-1".to_string(),
            is_public: true,
            image: None,
        };
        Mock::given(method("POST"))
            .and(path("/api/inventories/"))
            .and(body_json(&data))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "9", "name": "Tools", "code": "TLS"})))
            .expect(1)
            .mount(&server)
            .await;
        let created = create_inventory(&client_for(&server), &data).await.unwrap();
        assert_eq!(created.id, "9");
    }
}
