//! REST resources for the v2 Printful API.
//!
//! # Available Resources
//!
//! ## Store Resource
//!
//! - [`Store`] - A store connected to the Printful account
//! - [`StoreList`] - One page of stores with paging and links
//! - [`StoreListParams`] - Parameters for listing stores
//!
//! Endpoints:
//! - `GET /v2/stores` via [`StoreList::all`]
//! - `GET /v2/stores/{store_id}` via [`Store::find`]
//!
//! ## Common Types
//!
//! - [`Paging`] - Offset/limit/total metadata of a list response
//! - [`Link`] - A hypermedia link from a `_links` object

mod common;
mod store;

pub use common::{Link, Paging};
pub use store::{Store, StoreList, StoreListParams};
