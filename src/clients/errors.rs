//! HTTP-specific error types for the Printful API SDK.
//!
//! This module contains error types for HTTP operations: transport failures,
//! undecodable response bodies, non-2xx responses, and requests rejected
//! before they are sent.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`ResponseDecodeError`]: A response body that is not valid JSON
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use printful_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(result) => println!("Success: {}", result.data()),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.reason),
//!     Err(HttpError::Decode(e)) => println!("Bad body ({}): {}", e.code, e),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a status outside 200-299.
///
/// The body is kept even though the call failed, since Printful puts its
/// error details there.
///
/// # Example
///
/// ```rust
/// use printful_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     reason: "Not Found".to_string(),
///     body: serde_json::json!({"error": {"message": "Store not found"}}),
/// };
///
/// assert_eq!(error.to_string(), "404: Not Found");
/// ```
#[derive(Debug, Error)]
#[error("{code}: {reason}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The HTTP reason phrase (e.g., "Not Found").
    pub reason: String,
    /// The parsed response body.
    pub body: serde_json::Value,
}

/// Error returned when a response body is not valid JSON.
///
/// This is raised regardless of the status code.
#[derive(Debug, Error)]
#[error("Bad JSON in response")]
pub struct ResponseDecodeError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The JSON parse error.
    pub source: serde_json::Error,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The endpoint is empty after normalization.
    #[error("Invalid endpoint '{endpoint}': the endpoint cannot be empty.")]
    EmptyEndpoint {
        /// The endpoint that was provided.
        endpoint: String,
    },

    /// A body was attached to a method that does not send one.
    #[error("Cannot send a body with {method} requests.")]
    BodyNotAllowed {
        /// The HTTP method that was used.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body could not be parsed as JSON.
    #[error(transparent)]
    Decode(#[from] ResponseDecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including timeouts.
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
}
