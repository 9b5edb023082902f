//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Printful API bearer token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs. The token format itself is
/// not validated.
///
/// # Example
///
/// ```rust
/// use printful_api::AuthToken;
///
/// let token = AuthToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated API host.
///
/// Accepts either a bare host name, which implies `https`, or a full
/// `scheme://host[:port]` origin. Only `http` and `https` are accepted, and
/// the origin may not carry a path, query, or fragment. A trailing `/` is
/// dropped.
///
/// # Example
///
/// ```rust
/// use printful_api::ApiHost;
///
/// let host = ApiHost::new("api.printful.com").unwrap();
/// assert_eq!(host.as_ref(), "https://api.printful.com");
/// assert_eq!(host.scheme(), "https");
/// assert_eq!(host.host_name(), "api.printful.com");
///
/// let local = ApiHost::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(local.as_ref(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiHost {
    /// The production Printful API host.
    pub const DEFAULT_HOST: &'static str = "api.printful.com";

    const DEFAULT_SCHEME: &'static str = "https";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the host is invalid.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = host.into();
        let invalid = || ConfigError::InvalidApiHost { host: raw.clone() };

        let trimmed = raw.trim().trim_end_matches('/');
        let url = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("{}://{trimmed}", Self::DEFAULT_SCHEME)
        };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let authority = &url[host_start..];
        if authority.is_empty()
            || authority.contains(['/', '?', '#'])
            || authority.chars().any(char::is_whitespace)
        {
            return Err(invalid());
        }

        // Host ends at the port separator, if any
        let host_end = authority.find(':').map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion, without scheme or port.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiHost {
    fn default() -> Self {
        Self {
            url: format!("{}://{}", Self::DEFAULT_SCHEME, Self::DEFAULT_HOST),
            scheme_end: Self::DEFAULT_SCHEME.len(),
            host_start: Self::DEFAULT_SCHEME.len() + 3,
            host_end: Self::DEFAULT_SCHEME.len() + 3 + Self::DEFAULT_HOST.len(),
        }
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
