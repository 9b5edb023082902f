//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v2/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! The latest version is re-exported at this module level for convenience:
//!
//! ```rust,ignore
//! use printful_api::rest::resources::StoreList;  // Uses latest version
//!
//! // Or explicitly specify a version:
//! use printful_api::rest::resources::v2::StoreList;
//! ```

pub mod v2;

pub use v2::{Link, Paging, Store, StoreList, StoreListParams};
