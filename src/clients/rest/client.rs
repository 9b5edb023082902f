//! REST adapter implementation for the Printful API.

use std::collections::HashMap;

use crate::clients::{
    ApiResult, HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError,
};
use crate::config::{ApiVersion, PrintfulConfig};
use crate::error::PrintfulApiError;

/// Low-level REST adapter for the Printful API.
///
/// Provides `get`, `post`, and `delete` methods that perform one
/// authenticated request each and return the normalized [`ApiResult`].
///
/// The adapter holds only immutable configuration, set once at construction.
///
/// # Thread Safety
///
/// `RestAdapter` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use printful_api::{AuthToken, PrintfulConfig, RestAdapter};
///
/// let config = PrintfulConfig::builder()
///     .auth_token(AuthToken::new("my-token")?)
///     .build()?;
/// let adapter = RestAdapter::new(&config)?;
///
/// // GET request
/// let result = adapter.get("stores", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"name": "My store"});
/// let result = adapter.post("stores", None, Some(body)).await?;
/// ```
#[derive(Debug)]
pub struct RestAdapter {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify RestAdapter is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestAdapter>();
};

impl RestAdapter {
    /// Creates a new REST adapter from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PrintfulApiError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &PrintfulConfig) -> Result<Self, PrintfulApiError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(
            base_url = %http_client.base_url(),
            ssl_verify = config.ssl_verify(),
            "Created Printful REST adapter"
        );

        Ok(Self {
            http_client,
            api_version: config.api_version().clone(),
        })
    }

    /// Returns the API version being used by this adapter.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the base URL endpoints are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Sends a GET request to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The endpoint path (e.g., "stores", "/stores/123")
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`PrintfulApiError::Http`] if the endpoint is empty, the
    /// request fails, the body is not JSON, or the status is not 2xx.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("limit".to_string(), "10".to_string());
    /// let result = adapter.get("stores", Some(query)).await?;
    /// ```
    pub async fn get(
        &self,
        endpoint: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<ApiResult, PrintfulApiError> {
        self.make_request(HttpMethod::Get, endpoint, query, None).await
    }

    /// Sends a POST request to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The endpoint path
    /// * `query` - Optional query parameters
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn post(
        &self,
        endpoint: &str,
        query: Option<HashMap<String, String>>,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResult, PrintfulApiError> {
        self.make_request(HttpMethod::Post, endpoint, query, body).await
    }

    /// Sends a DELETE request to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The endpoint path
    /// * `query` - Optional query parameters
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn delete(
        &self,
        endpoint: &str,
        query: Option<HashMap<String, String>>,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResult, PrintfulApiError> {
        self.make_request(HttpMethod::Delete, endpoint, query, body).await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        query: Option<HashMap<String, String>>,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResult, PrintfulApiError> {
        let endpoint = normalize_endpoint(endpoint).map_err(HttpError::from)?;

        let mut builder = HttpRequest::builder(method, endpoint);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(HttpError::from)?;

        Ok(self.http_client.request(request).await?)
    }
}

/// Normalizes an endpoint to exactly one leading `/`.
///
/// ```rust,ignore
/// assert_eq!(normalize_endpoint("stores")?, "/stores");
/// assert_eq!(normalize_endpoint("//stores/1")?, "/stores/1");
/// ```
fn normalize_endpoint(endpoint: &str) -> Result<String, InvalidHttpRequestError> {
    let path = endpoint.trim().trim_start_matches('/');

    if path.is_empty() {
        return Err(InvalidHttpRequestError::EmptyEndpoint {
            endpoint: endpoint.to_string(),
        });
    }

    Ok(format!("/{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiHost, AuthToken};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config() -> PrintfulConfig {
        PrintfulConfig::builder()
            .auth_token(AuthToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    fn create_mock_adapter(server: &MockServer) -> RestAdapter {
        let config = PrintfulConfig::builder()
            .auth_token(AuthToken::new("test-token").unwrap())
            .api_host(ApiHost::new(server.uri()).unwrap())
            .build()
            .unwrap();
        RestAdapter::new(&config).unwrap()
    }

    // === Endpoint Normalization Tests ===

    #[test]
    fn test_normalize_endpoint_adds_leading_slash() {
        assert_eq!(normalize_endpoint("stores").unwrap(), "/stores");
    }

    #[test]
    fn test_normalize_endpoint_keeps_single_leading_slash() {
        assert_eq!(normalize_endpoint("/stores").unwrap(), "/stores");
    }

    #[test]
    fn test_normalize_endpoint_collapses_leading_slashes() {
        assert_eq!(normalize_endpoint("//stores/12").unwrap(), "/stores/12");
    }

    #[test]
    fn test_normalize_endpoint_empty_returns_error() {
        for endpoint in ["", "/", "  ", "///"] {
            assert!(
                matches!(
                    normalize_endpoint(endpoint),
                    Err(InvalidHttpRequestError::EmptyEndpoint { .. })
                ),
                "Expected {endpoint:?} to be rejected"
            );
        }
    }

    // === Construction Tests ===

    #[test]
    fn test_adapter_uses_configured_version() {
        let adapter = RestAdapter::new(&create_test_config()).unwrap();

        assert_eq!(adapter.api_version(), &ApiVersion::V2);
        assert_eq!(adapter.base_url(), "https://api.printful.com/v2");
    }

    #[test]
    fn test_adapter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestAdapter>();
    }

    // === Request Tests ===

    #[tokio::test]
    async fn test_get_sends_query_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/stores"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = create_mock_adapter(&mock_server);
        let mut query = HashMap::new();
        query.insert("limit".to_string(), "5".to_string());

        let result = adapter.get("stores", Some(query)).await.unwrap();
        assert_eq!(result.status_code(), 200);
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mock_server = MockServer::start().await;
        let body = json!({"name": "New store"});

        Mock::given(method("POST"))
            .and(path("/v2/stores"))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 7}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = create_mock_adapter(&mock_server);
        let result = adapter.post("/stores", None, Some(body)).await.unwrap();

        assert_eq!(result.status_code(), 201);
        assert_eq!(result.message(), "Created");
        assert_eq!(result.data()["data"]["id"], 7);
    }

    #[tokio::test]
    async fn test_delete_sends_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v2/stores/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = create_mock_adapter(&mock_server);
        let result = adapter.delete("stores/7", None, None).await.unwrap();

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_empty_endpoint_is_rejected_without_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let adapter = create_mock_adapter(&mock_server);
        let error = adapter.get("/", None).await.unwrap_err();

        assert!(matches!(
            error,
            PrintfulApiError::Http(HttpError::InvalidRequest(
                InvalidHttpRequestError::EmptyEndpoint { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_http_errors_surface_as_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/stores"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"code": 500})))
            .mount(&mock_server)
            .await;

        let adapter = create_mock_adapter(&mock_server);
        let error = adapter.get("stores", None).await.unwrap_err();

        assert_eq!(error.status_code(), Some(500));
        assert_eq!(error.to_string(), "500: Internal Server Error");
    }
}
