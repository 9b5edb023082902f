//! Error types for the Printful API SDK.
//!
//! This module contains the configuration error type and the crate-wide
//! [`PrintfulApiError`] that every public operation returns.
//!
//! # Error Handling
//!
//! Configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected before any request is made. API operations return
//! `Result<T, PrintfulApiError>`, a single catch-all type whose variants
//! keep the finer-grained cause available for matching.
//!
//! # Example
//!
//! ```rust
//! use printful_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur during SDK configuration.
///
/// This enum covers invalid configuration values and credential lookup
/// failures. Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Printful API token.")]
    EmptyAuthToken,

    /// A required environment variable is not set.
    #[error("{name} not found in environment variables.")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },

    /// A local environment file exists but could not be read.
    #[error("Could not read environment file '{path}': {reason}")]
    EnvFile {
        /// The file that failed to load.
        path: String,
        /// Why loading failed.
        reason: String,
    },

    /// The API host is invalid.
    #[error("Invalid API host '{host}'. Expected a host name (e.g., 'api.printful.com') or an origin such as 'https://api.printful.com'.")]
    InvalidApiHost {
        /// The invalid host that was provided.
        host: String,
    },

    /// The API version is invalid.
    #[error("Invalid API version '{version}'. Expected a version path segment such as 'v2'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// The error returned by every Printful API operation.
///
/// Callers that only care whether a call failed can treat this as a single
/// error kind. Callers that need finer handling can match on the variant or
/// walk [`std::error::Error::source`].
///
/// # Example
///
/// ```rust,ignore
/// use printful_api::{HttpError, PrintfulApiError};
///
/// match adapter.get("stores", None).await {
///     Ok(result) => println!("{}", result.data()),
///     Err(PrintfulApiError::Http(HttpError::Response(e))) => {
///         println!("API returned {}: {}", e.code, e.reason);
///     }
///     Err(e) => println!("Printful API error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum PrintfulApiError {
    /// Invalid configuration or missing credentials.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP round trip failed (transport, decode, or status).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response data could not be mapped into a domain model.
    #[error("Could not build {resource} from response data: {source}")]
    Model {
        /// The model that was being built (e.g., "Store").
        resource: &'static str,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },
}

impl PrintfulApiError {
    /// Returns the HTTP status code associated with this error, if any.
    ///
    /// Transport failures and configuration errors have no status code.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(e.code),
            Self::Http(HttpError::Decode(e)) => Some(e.code),
            _ => None,
        }
    }
}
