//! REST API Wrappers
//!
//! Thin fetch wrappers over the inventory backend, organized by domain.

mod inventories;
mod fields;
mod items;
mod numbering;
mod access;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export all public items
pub use inventories::*;
pub use fields::*;
pub use items::*;
pub use numbering::*;
pub use access::*;

/// Characters escaped inside a single path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Common result type for API calls
pub type FetchResult<T> = Result<T, FetchError>;

/// "Fetch failed". The variant only records the cause for the log line.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Transport(String),
    Status(u16),
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "fetch failed: {}", msg),
            FetchError::Status(code) => write!(f, "fetch failed: HTTP {}", code),
            FetchError::Decode(msg) => write!(f, "fetch failed: bad response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Log a failed call and hand back the empty default instead
pub fn or_log<T: Default>(what: &str, result: FetchResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("[API] error when loading {}: {}", what, e);
            T::default()
        }
    }
}

/// Base URL plus a shared HTTP client
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join encoded path segments onto the base URL
    pub fn endpoint(&self, segments: &[&str]) -> String {
        let path: Vec<String> = segments
            .iter()
            .map(|s| utf8_percent_encode(s, SEGMENT_ENCODE_SET).to_string())
            .collect();
        format!("{}{}", self.base_url, path.join("/"))
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> FetchResult<T> {
        let url = self.endpoint(segments);
        log::debug!("[API] GET {}", url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> FetchResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        log::debug!("[API] POST {}", url);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> FetchResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Client rooted at `{server}/api/`
    pub(super) fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(format!("{}/api", server.uri()))
    }

    async fn serve_top5(template: ResponseTemplate) -> FetchResult<Vec<crate::models::Inventory>> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/inventories/top5"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        load_top5(&client_for(&server)).await
    }

    #[tokio::test]
    async fn test_not_found_is_status_error() {
        assert_eq!(serve_top5(ResponseTemplate::new(404)).await, Err(FetchError::Status(404)));
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let template = ResponseTemplate::new(500).set_body_string("boom");
        assert_eq!(serve_top5(template).await, Err(FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let template = ResponseTemplate::new(200).set_body_string("{ not json");
        assert!(matches!(serve_top5(template).await, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_error() {
        let template = ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "1"}));
        assert!(matches!(serve_top5(template).await, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = ApiClient::new("http://localhost:3000/api");
        assert_eq!(client.base_url(), "http://localhost:3000/api/");
        assert_eq!(
            client.endpoint(&["numberings", "abc", "one"]),
            "http://localhost:3000/api/numberings/abc/one"
        );
        assert_eq!(client.endpoint(&["inventories", ""]), "http://localhost:3000/api/inventories/");
    }

    #[test]
    fn test_endpoint_escapes_segments() {
        let client = ApiClient::new("http://h/");
        assert_eq!(client.endpoint(&["items", "a/b c", "all"]), "http://h/items/a%2Fb%20c/all");
    }

    #[test]
    fn test_or_log_falls_back_to_default() {
        let fields: Vec<u32> = or_log("fields", Err(FetchError::Status(500)));
        assert!(fields.is_empty());
        assert_eq!(or_log("count", Ok(3u32)), 3);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(FetchError::Status(404).to_string(), "fetch failed: HTTP 404");
        assert!(FetchError::Transport("offline".into()).to_string().contains("offline"));
    }
}
