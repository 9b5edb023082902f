//! Printful API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Printful API to use. The version is the first path segment of every
//! request URL (e.g., `https://api.printful.com/v2/stores`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Printful API version.
///
/// # Example
///
/// ```rust
/// use printful_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V2);
///
/// let version: ApiVersion = "v1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1);
///
/// assert_eq!(format!("{}", ApiVersion::V2), "v2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// The legacy v1 Printful API.
    V1,
    /// The v2 API, which returns `data`/`paging`/`_links` envelopes.
    #[default]
    V2,
    /// Custom path segment for versions this crate does not know about.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns `true` for the versions this crate knows about.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("v1"),
            Self::V2 => f.write_str("v2"),
            Self::Custom(version) => f.write_str(version),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');

        match trimmed.to_ascii_lowercase().as_str() {
            "v1" => return Ok(Self::V1),
            "v2" => return Ok(Self::V2),
            _ => {}
        }

        let is_segment = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !is_segment {
            return Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            });
        }

        Ok(Self::Custom(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_v2() {
        assert_eq!(ApiVersion::latest(), ApiVersion::V2);
        assert_eq!(ApiVersion::default(), ApiVersion::V2);
    }

    #[test]
    fn test_parse_known_versions_case_insensitively() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("V2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert_eq!("/v2/".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
    }

    #[test]
    fn test_parse_custom_version() {
        let version: ApiVersion = "v3-beta".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("v3-beta".to_string()));
        assert!(!version.is_known());
        assert_eq!(version.to_string(), "v3-beta");
    }

    #[test]
    fn test_parse_rejects_invalid_segments() {
        for value in ["", "/", "v2/stores", "v 2"] {
            assert!(
                matches!(
                    value.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "Expected {value:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for version in [ApiVersion::V1, ApiVersion::V2] {
            assert_eq!(version.to_string().parse::<ApiVersion>().unwrap(), version);
        }
    }
}
