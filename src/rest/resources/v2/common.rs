//! Types shared by v2 list and detail responses.

use serde::{Deserialize, Serialize};

/// Paging metadata of a list response.
///
/// # Example
///
/// ```rust
/// use printful_api::rest::resources::Paging;
///
/// let paging: Paging = serde_json::from_str(r#"{"total": 42, "offset": 20, "limit": 20}"#).unwrap();
/// assert_eq!(paging.total, 42);
/// assert!(paging.has_more());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paging {
    /// Total number of items across all pages.
    pub total: u64,
    /// Offset of the first item on this page.
    pub offset: u64,
    /// Maximum number of items per page.
    pub limit: u64,
}

impl Paging {
    /// Returns `true` if items exist beyond this page.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.total
    }
}

/// A hypermedia link from a `_links` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// The absolute URL of the linked resource.
    pub href: String,
}
