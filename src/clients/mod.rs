//! HTTP client types for Printful API communication.
//!
//! This module provides the HTTP layer for making authenticated requests to
//! the Printful API and normalizing their outcome.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client performing one round trip per call
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`ApiResult`]: The normalized result of a successful call
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`HttpError`]: Transport, decode, status, and validation failures
//! - [`rest::RestAdapter`]: The `get`/`post`/`delete` surface built on top
//!
//! # Example
//!
//! ```rust,ignore
//! use printful_api::{AuthToken, PrintfulConfig};
//! use printful_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = PrintfulConfig::builder()
//!     .auth_token(AuthToken::new("my-token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/stores")
//!     .query_param("limit", "10")
//!     .build()?;
//!
//! let result = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Every call is a single attempt and every failure is
//! returned to the caller.

mod api_result;
mod errors;
mod http_client;
mod http_request;
pub mod rest;

pub use api_result::ApiResult;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, ResponseDecodeError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};

pub use rest::RestAdapter;
