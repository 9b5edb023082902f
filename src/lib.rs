//! # Printful API Rust SDK
//!
//! A Rust SDK for the Printful REST API, providing type-safe configuration,
//! credential loading, and a low-level REST adapter that maps one HTTP
//! response to one typed result.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PrintfulConfig`] and [`PrintfulConfigBuilder`]
//! - Validated newtypes for the auth token and API host
//! - Token loading from the environment or a local `.env` file via [`config::credentials`]
//! - An async REST adapter ([`RestAdapter`]) with `get`, `post`, and `delete`
//! - A normalized result envelope ([`ApiResult`])
//! - Typed store resources under [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use printful_api::{PrintfulConfig, AuthToken, ApiVersion};
//!
//! let config = PrintfulConfig::builder()
//!     .auth_token(AuthToken::new("your-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://api.printful.com/v2");
//! ```
//!
//! ## Loading Credentials
//!
//! The token is resolved once at the program boundary and passed into the
//! adapter. `PRINTFUL_AUTH_TOKEN` is read from the process environment, or
//! from a `.env` file in the working directory when the variable is unset.
//!
//! ```rust,ignore
//! use printful_api::{PrintfulConfig, RestAdapter};
//!
//! let config = PrintfulConfig::from_env()?;
//! let adapter = RestAdapter::new(&config)?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use printful_api::RestAdapter;
//! use printful_api::rest::resources::{StoreList, StoreListParams};
//!
//! // Raw adapter call
//! let result = adapter.get("stores", None).await?;
//! println!("{} {}: {}", result.status_code(), result.message(), result.data());
//!
//! // Typed resource
//! let stores = StoreList::all(&adapter, Some(StoreListParams { limit: Some(5), ..Default::default() })).await?;
//! println!("{} of {} stores", stores.data.len(), stores.paging.total);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Single attempt**: No retries, no pagination traversal, no caching

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiHost, ApiVersion, AuthToken, PrintfulConfig, PrintfulConfigBuilder};
pub use error::{ConfigError, PrintfulApiError};

// Re-export HTTP client types
pub use clients::{
    ApiResult, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponseError, InvalidHttpRequestError, ResponseDecodeError, RestAdapter,
};

// Re-export resource types
pub use rest::resources::{Link, Paging, Store, StoreList, StoreListParams};
