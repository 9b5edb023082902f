//! REST adapter for the Printful API.
//!
//! This module provides [`RestAdapter`], the low-level entry point of the
//! SDK. It offers `get()`, `post()`, and `delete()` methods on top of the
//! [`HttpClient`](crate::clients::HttpClient) and returns every failure as a
//! [`PrintfulApiError`](crate::PrintfulApiError).
//!
//! # Example
//!
//! ```rust,ignore
//! use printful_api::{PrintfulConfig, RestAdapter};
//!
//! let config = PrintfulConfig::from_env()?;
//! let adapter = RestAdapter::new(&config)?;
//!
//! let result = adapter.get("stores", None).await?;
//! println!("Stores: {}", result.data());
//! ```
//!
//! # Endpoint Normalization
//!
//! Endpoints are normalized to exactly one leading `/` before being appended
//! to the base URL, so `stores`, `/stores`, and `//stores` all address
//! `https://api.printful.com/v2/stores`. An empty endpoint is rejected before
//! any request is sent.

mod client;

pub use client::RestAdapter;
