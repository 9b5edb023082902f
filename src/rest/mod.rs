//! Typed Printful REST resources.
//!
//! The [`RestAdapter`](crate::RestAdapter) returns untyped JSON wrapped in an
//! [`ApiResult`](crate::ApiResult). This module maps that JSON into typed
//! value objects and offers convenience calls for the endpoints the SDK
//! models.
//!
//! # Example
//!
//! ```rust,ignore
//! use printful_api::rest::resources::{Store, StoreList, StoreListParams};
//!
//! let stores = StoreList::all(&adapter, None).await?;
//! println!("{} of {} stores", stores.data.len(), stores.paging.total);
//!
//! let store = Store::find(&adapter, stores.data[0].id).await?;
//! ```

pub mod resources;
