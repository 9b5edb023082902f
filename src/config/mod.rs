//! Configuration types for the Printful API SDK.
//!
//! This module provides the configuration types used to construct a
//! [`RestAdapter`](crate::RestAdapter).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PrintfulConfig`]: The configuration struct holding all SDK settings
//! - [`PrintfulConfigBuilder`]: A builder for constructing [`PrintfulConfig`] instances
//! - [`AuthToken`]: A validated bearer token with masked debug output
//! - [`ApiHost`]: A validated API host
//! - [`ApiVersion`]: The Printful API version to use
//! - [`credentials`]: Loading the token from the environment or a `.env` file
//!
//! # Example
//!
//! ```rust
//! use printful_api::{PrintfulConfig, AuthToken, ApiVersion};
//!
//! let config = PrintfulConfig::builder()
//!     .auth_token(AuthToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://api.printful.com/v2");
//! ```

pub mod credentials;
mod newtypes;
mod version;

pub use newtypes::{ApiHost, AuthToken};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Printful API SDK.
///
/// The configuration is resolved once, at the program boundary, and passed
/// into the adapter. It is never read from the environment implicitly.
///
/// # Thread Safety
///
/// `PrintfulConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use printful_api::{PrintfulConfig, AuthToken, ApiHost};
///
/// let config = PrintfulConfig::builder()
///     .auth_token(AuthToken::new("my-token").unwrap())
///     .api_host(ApiHost::new("http://127.0.0.1:8080").unwrap())
///     .ssl_verify(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "http://127.0.0.1:8080/v2");
/// assert!(!config.ssl_verify());
/// ```
#[derive(Clone, Debug)]
pub struct PrintfulConfig {
    auth_token: AuthToken,
    api_host: ApiHost,
    api_version: ApiVersion,
    ssl_verify: bool,
    user_agent_prefix: Option<String>,
}

impl PrintfulConfig {
    /// Creates a new builder for constructing a `PrintfulConfig`.
    #[must_use]
    pub fn builder() -> PrintfulConfigBuilder {
        PrintfulConfigBuilder::new()
    }

    /// Builds a default configuration with the token from the environment.
    ///
    /// See [`credentials::load_auth_token`] for the lookup rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `PRINTFUL_AUTH_TOKEN` is not
    /// set, or [`ConfigError::EnvFile`] if the `.env` file is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder()
            .auth_token(credentials::load_auth_token()?)
            .build()
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn ssl_verify(&self) -> bool {
        self.ssl_verify
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL every endpoint is appended to.
    ///
    /// This is `<host>/<version>`, e.g. `https://api.printful.com/v2`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.api_host, self.api_version)
    }
}

// Verify PrintfulConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrintfulConfig>();
};

/// Builder for constructing [`PrintfulConfig`] instances.
///
/// The only required field is `auth_token`.
///
/// # Defaults
///
/// - `api_host`: `https://api.printful.com`
/// - `api_version`: [`ApiVersion::V2`]
/// - `ssl_verify`: `true`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct PrintfulConfigBuilder {
    auth_token: Option<AuthToken>,
    api_host: Option<ApiHost>,
    api_version: Option<ApiVersion>,
    ssl_verify: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl PrintfulConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Enables or disables TLS certificate verification.
    ///
    /// Only turn this off when talking to a host with a broken certificate
    /// chain you trust anyway.
    #[must_use]
    pub const fn ssl_verify(mut self, verify: bool) -> Self {
        self.ssl_verify = Some(verify);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PrintfulConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `auth_token` is not set.
    pub fn build(self) -> Result<PrintfulConfig, ConfigError> {
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        Ok(PrintfulConfig {
            auth_token,
            api_host: self.api_host.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            ssl_verify: self.ssl_verify.unwrap_or(true),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AuthToken {
        AuthToken::new("test-token").unwrap()
    }

    #[test]
    fn test_builder_requires_auth_token() {
        let result = PrintfulConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "auth_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = PrintfulConfig::builder().auth_token(token()).build().unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2);
        assert_eq!(config.api_host().host_name(), "api.printful.com");
        assert!(config.ssl_verify());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.base_url(), "https://api.printful.com/v2");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = PrintfulConfig::builder()
            .auth_token(token())
            .api_host(ApiHost::new("sandbox.example.com").unwrap())
            .api_version(ApiVersion::V1)
            .ssl_verify(false)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "https://sandbox.example.com/v1");
        assert!(!config.ssl_verify());
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.auth_token().as_ref(), "test-token");
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = PrintfulConfig::builder().auth_token(token()).build().unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("PrintfulConfig"));
        assert!(!debug_str.contains("test-token"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrintfulConfig>();
    }
}
