//! Store resource implementation.
//!
//! This module provides the [`Store`] and [`StoreList`] types for the v2
//! stores endpoints.
//!
//! - `GET https://api.printful.com/v2/stores`
//! - `GET https://api.printful.com/v2/stores/{store_id}`
//!
//! # Example
//!
//! ```rust,ignore
//! use printful_api::rest::resources::v2::{Store, StoreList, StoreListParams};
//!
//! let params = StoreListParams { limit: Some(10), ..Default::default() };
//! let stores = StoreList::all(&adapter, Some(params)).await?;
//! for store in &stores.data {
//!     println!("{} ({}): {}", store.id, store.store_type, store.name);
//! }
//!
//! let store = Store::find(&adapter, 12345).await?;
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::common::{Link, Paging};
use crate::clients::{ApiResult, RestAdapter};
use crate::error::PrintfulApiError;

/// A store connected to the Printful account.
///
/// Built from one JSON record such as
/// `{"id": 5, "type": "native", "name": "My store"}`. Fields must have the
/// expected JSON types; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Store {
    /// Store ID number.
    pub id: u64,
    /// Printful type of store (e.g., "native", "shopify").
    #[serde(rename = "type")]
    pub store_type: String,
    /// Store name.
    pub name: String,
}

impl Store {
    const NAME: &'static str = "Store";

    /// Builds a store from one JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`PrintfulApiError::Model`] if a field is missing or has the
    /// wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self, PrintfulApiError> {
        serde_json::from_value(value).map_err(|source| PrintfulApiError::Model {
            resource: Self::NAME,
            source,
        })
    }

    /// Builds a store from an adapter result.
    ///
    /// Accepts the v2 `{"data": {...}}` envelope as well as a bare record.
    ///
    /// # Errors
    ///
    /// Returns [`PrintfulApiError::Model`] if the record does not match.
    pub fn from_result(result: ApiResult) -> Result<Self, PrintfulApiError> {
        match result.into_data() {
            serde_json::Value::Object(mut map)
                if map.get("data").is_some_and(serde_json::Value::is_object) =>
            {
                Self::from_value(map.remove("data").unwrap_or_default())
            }
            record => Self::from_value(record),
        }
    }

    /// Fetches a single store by ID.
    ///
    /// # Errors
    ///
    /// Returns [`PrintfulApiError::Http`] if the request fails (e.g., a 404
    /// for an unknown ID), or [`PrintfulApiError::Model`] if the response
    /// does not describe a store.
    pub async fn find(adapter: &RestAdapter, id: u64) -> Result<Self, PrintfulApiError> {
        let result = adapter.get(&format!("{}/{id}", StoreList::PATH), None).await?;
        Self::from_result(result)
    }
}

/// Parameters for listing stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreListParams {
    /// Number of stores to skip.
    pub offset: Option<u64>,
    /// Maximum number of stores to return.
    pub limit: Option<u64>,
}

impl StoreListParams {
    /// Converts the parameters to a query map, skipping unset values.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(offset) = self.offset {
            query.insert("offset".to_string(), offset.to_string());
        }
        if let Some(limit) = self.limit {
            query.insert("limit".to_string(), limit.to_string());
        }
        query
    }
}

/// One page of stores with paging metadata and links.
///
/// Top-level fields other than `data`, `_links`, and `paging` are not
/// dropped silently: their names are collected in [`extra`](Self::extra),
/// sorted and without duplicates.
///
/// # Example
///
/// ```rust
/// use printful_api::rest::resources::StoreList;
/// use serde_json::json;
///
/// let list = StoreList::from_value(json!({
///     "data": [{"id": 5, "type": "native", "name": "Test"}],
///     "paging": {"total": 1, "offset": 0, "limit": 20},
///     "_links": {"self": {"href": "https://api.printful.com/v2/stores"}},
///     "debug": true
/// })).unwrap();
///
/// assert_eq!(list.data.len(), 1);
/// assert_eq!(list.paging.total, 1);
/// assert_eq!(list.extra, vec!["debug".to_string()]);
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(from = "StoreListRecord")]
pub struct StoreList {
    /// The stores on this page, in response order.
    pub data: Vec<Store>,
    /// Links keyed by relation name (e.g., "self", "next").
    pub links: BTreeMap<String, Link>,
    /// Paging metadata.
    pub paging: Paging,
    /// Names of unrecognized top-level fields.
    pub extra: Vec<String>,
}

/// Wire shape of a store list response.
#[derive(Deserialize)]
struct StoreListRecord {
    data: Vec<Store>,
    #[serde(rename = "_links", default)]
    links: BTreeMap<String, Link>,
    paging: Paging,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl From<StoreListRecord> for StoreList {
    fn from(record: StoreListRecord) -> Self {
        Self {
            data: record.data,
            links: record.links,
            paging: record.paging,
            extra: record.extra.into_iter().map(|(key, _)| key).collect(),
        }
    }
}

impl StoreList {
    /// Endpoint of the store collection.
    pub const PATH: &'static str = "stores";

    const NAME: &'static str = "StoreList";

    /// Builds a store list from a parsed response body.
    ///
    /// # Errors
    ///
    /// Returns [`PrintfulApiError::Model`] if `data` or `paging` is missing,
    /// or any known field has the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self, PrintfulApiError> {
        serde_json::from_value(value).map_err(|source| PrintfulApiError::Model {
            resource: Self::NAME,
            source,
        })
    }

    /// Builds a store list from an adapter result.
    ///
    /// # Errors
    ///
    /// Same as [`from_value`](Self::from_value).
    pub fn from_result(result: ApiResult) -> Result<Self, PrintfulApiError> {
        Self::from_value(result.into_data())
    }

    /// Fetches one page of stores.
    ///
    /// # Errors
    ///
    /// Returns [`PrintfulApiError::Http`] if the request fails, or
    /// [`PrintfulApiError::Model`] if the response is not a store list.
    pub async fn all(
        adapter: &RestAdapter,
        params: Option<StoreListParams>,
    ) -> Result<Self, PrintfulApiError> {
        let query = params.map(|p| p.to_query()).filter(|q| !q.is_empty());
        let result = adapter.get(Self::PATH, query).await?;
        Self::from_result(result)
    }

    /// Returns the link for a relation name, if present.
    #[must_use]
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.get(rel)
    }
}
