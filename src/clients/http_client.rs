//! HTTP client for Printful API communication.
//!
//! This module provides the [`HttpClient`] type, which performs exactly one
//! authenticated HTTP round trip per call and normalizes the outcome into an
//! [`ApiResult`] or an [`HttpError`].

use std::collections::HashMap;
use std::fmt;

use crate::clients::api_result::ApiResult;
use crate::clients::errors::{HttpError, HttpResponseError, ResponseDecodeError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::PrintfulConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Printful API.
///
/// The client handles:
/// - Base URL construction from the configured host and API version
/// - Default headers including User-Agent and the bearer token
/// - Optional TLS certificate verification
/// - JSON decoding and status-code checking
/// - Debug/error logging around every call
///
/// There is no retry logic: each call is a single attempt.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use printful_api::{AuthToken, PrintfulConfig};
/// use printful_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = PrintfulConfig::builder()
///     .auth_token(AuthToken::new("my-token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/stores").build()?;
/// let result = client.request(request).await?;
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.printful.com/v2`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

// Default headers carry the bearer token
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &PrintfulConfig) -> Result<Self, HttpError> {
        let base_url = config.base_url();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Printful API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.auth_token().as_ref()),
        );

        if !config.ssl_verify() {
            tracing::warn!(
                base_url = %base_url,
                "TLS certificate verification is disabled for Printful API requests"
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!config.ssl_verify())
            .build()?;

        Ok(Self {
            client,
            base_url,
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the full URL for an endpoint path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends an HTTP request to the Printful API.
    ///
    /// The body is decoded before the status is checked, so an undecodable
    /// body is reported as [`HttpError::Decode`] even for a 2xx status. An
    /// empty body is not valid JSON and is reported the same way.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be sent or the body cannot be read (`Network`)
    /// - The body is not valid JSON (`Decode`)
    /// - The status is outside 200-299 (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<ApiResult, HttpError> {
        request.verify()?;

        let method = request.http_method;
        let url = self.url_for(&request.path);
        let params = &request.query;

        tracing::debug!(
            method = %method,
            url = %url,
            params = ?params,
            "Sending Printful API request"
        );

        let mut req_builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = params {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = match req_builder.send().await {
            Ok(res) => res,
            Err(e) => {
                tracing::error!(
                    method = %method,
                    url = %url,
                    params = ?params,
                    success = false,
                    error = %e,
                    "Request failed"
                );
                return Err(HttpError::Network(e));
            }
        };

        let status = res.status();
        let code = status.as_u16();
        let reason = reason_phrase(status);

        let body_text = match res.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(
                    method = %method,
                    url = %url,
                    params = ?params,
                    success = false,
                    error = %e,
                    "Request failed"
                );
                return Err(HttpError::Network(e));
            }
        };

        let data = match serde_json::from_str::<serde_json::Value>(&body_text) {
            Ok(data) => data,
            Err(source) => {
                tracing::error!(
                    method = %method,
                    url = %url,
                    params = ?params,
                    success = false,
                    status_code = code,
                    error = %source,
                    "Bad JSON in response"
                );
                return Err(ResponseDecodeError { code, source }.into());
            }
        };

        let is_success = (200..=299).contains(&code);
        if is_success {
            tracing::debug!(
                method = %method,
                url = %url,
                params = ?params,
                success = true,
                status_code = code,
                reason = %reason,
                "Printful API request completed"
            );
            return Ok(ApiResult::new(code, reason, data));
        }

        tracing::error!(
            method = %method,
            url = %url,
            params = ?params,
            success = false,
            status_code = code,
            reason = %reason,
            "Printful API request failed"
        );
        Err(HttpResponseError {
            code,
            reason,
            body: data,
        }
        .into())
    }
}

/// Returns the reason phrase for a status, or `HTTP <code>` for codes
/// without a registered phrase (e.g., Cloudflare's 520).
fn reason_phrase(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
}
