use crate::models::Numbering;
use super::{ApiClient, FetchResult};

/// `GET numberings/{inventoryId}/one`
pub async fn get_numbering_from_inventory(client: &ApiClient, inventory_id: &str) -> FetchResult<Numbering> {
    client.get_json(&["numberings", inventory_id, "one"]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::tests::client_for;
    use crate::api::FetchError;

    #[tokio::test]
    async fn test_get_numbering_from_inventory() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/numberings/1/one"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "n1", "inventoryId": "1", "pattern": "{CODE}-{SEQ:5}", "counter": 12
            })))
            .expect(1)
            .mount(&server)
            .await;
        let numbering = get_numbering_from_inventory(&client_for(&server), "1").await.unwrap();
        assert_eq!(numbering.pattern, "{CODE}-{SEQ:5}");
        assert_eq!(numbering.counter, 12);
    }

    #[tokio::test]
    async fn test_missing_numbering_is_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/numberings/404/one"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        let result = get_numbering_from_inventory(&client_for(&server), "404").await;
        assert_eq!(result, Err(FetchError::Status(404)));
    }
}
