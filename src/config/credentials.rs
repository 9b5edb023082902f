//! Credential loading for the Printful API.
//!
//! The API token is read from the `PRINTFUL_AUTH_TOKEN` variable. The process
//! environment wins; if the variable is not set there, a local `.env` file is
//! consulted. The process environment is never modified.
//!
//! Credentials are meant to be resolved once at the program boundary and
//! passed into [`PrintfulConfig`](crate::PrintfulConfig) explicitly.
//!
//! # Example
//!
//! ```rust,no_run
//! use printful_api::config::credentials::load_auth_token;
//! use printful_api::PrintfulConfig;
//!
//! let token = load_auth_token()?;
//! let config = PrintfulConfig::builder().auth_token(token).build()?;
//! # Ok::<(), printful_api::ConfigError>(())
//! ```

use std::fs::File;
use std::path::Path;

use crate::config::AuthToken;
use crate::error::ConfigError;

/// Name of the environment variable holding the API token.
pub const AUTH_TOKEN_ENV_VAR: &str = "PRINTFUL_AUTH_TOKEN";

/// Default name of the local environment file.
pub const ENV_FILE_NAME: &str = ".env";

/// Loads the API token from the process environment or a `.env` file.
///
/// The `.env` file is searched for in the current directory and its parents.
/// A missing file is not an error.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] if the variable is unset (or empty)
/// in both places, and [`ConfigError::EnvFile`] if a `.env` file exists but
/// cannot be parsed.
pub fn load_auth_token() -> Result<AuthToken, ConfigError> {
    resolve_auth_token(process_env_token(), || {
        read_env_file(ENV_FILE_NAME, dotenvy::from_filename_iter(ENV_FILE_NAME))
    })
}

/// Loads the API token from the process environment or the given env file.
///
/// Unlike [`load_auth_token`], only the exact `path` is consulted. A missing
/// file is not an error.
///
/// # Errors
///
/// Same as [`load_auth_token`].
pub fn load_auth_token_from(path: impl AsRef<Path>) -> Result<AuthToken, ConfigError> {
    let path = path.as_ref();
    resolve_auth_token(process_env_token(), || {
        read_env_file(&path.display().to_string(), dotenvy::from_path_iter(path))
    })
}

fn process_env_token() -> Option<String> {
    std::env::var(AUTH_TOKEN_ENV_VAR).ok()
}

/// Picks the token from the process value, falling back to the env file.
///
/// The file is only read when the process environment has no usable value.
fn resolve_auth_token<F>(
    process_value: Option<String>,
    env_file: F,
) -> Result<AuthToken, ConfigError>
where
    F: FnOnce() -> Result<Option<String>, ConfigError>,
{
    let token = match process_value.filter(|value| !value.is_empty()) {
        Some(value) => Some(value),
        None => env_file()?.filter(|value| !value.is_empty()),
    };

    token.map_or(
        Err(ConfigError::MissingEnvVar {
            name: AUTH_TOKEN_ENV_VAR,
        }),
        AuthToken::new,
    )
}

/// Looks up the token variable in a parsed env file.
fn read_env_file(
    path: &str,
    iter: Result<dotenvy::Iter<File>, dotenvy::Error>,
) -> Result<Option<String>, ConfigError> {
    let env_file_error = |e: &dotenvy::Error| ConfigError::EnvFile {
        path: path.to_string(),
        reason: e.to_string(),
    };

    let iter = match iter {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            tracing::debug!(path, "No environment file found");
            return Ok(None);
        }
        Err(e) => return Err(env_file_error(&e)),
    };

    let mut token = None;
    for item in iter {
        let (key, value) = item.map_err(|e| env_file_error(&e))?;
        // Later assignments win, as in a shell
        if key == AUTH_TOKEN_ENV_VAR {
            token = Some(value);
        }
    }
    Ok(token)
}
