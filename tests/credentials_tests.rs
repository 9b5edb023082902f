//! Integration tests for credential loading and configuration assembly.
//!
//! These tests never modify the process environment. A test that needs
//! `PRINTFUL_AUTH_TOKEN` in a particular state re-runs itself in a child
//! process with that state when the current process does not match.

use printful_api::config::credentials::{load_auth_token, load_auth_token_from, AUTH_TOKEN_ENV_VAR};
use printful_api::{ApiHost, ConfigError, PrintfulApiError, PrintfulConfig, RestAdapter};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROCESS_TOKEN: &str = "from-process-env";

/// Returns `true` if the token variable already has the `required` value
/// (`None` meaning unset). Otherwise runs `test_name` in a child process
/// with the variable set accordingly, asserts it passed, and returns `false`.
fn in_token_env(test_name: &str, required: Option<&str>) -> bool {
    let current = std::env::var(AUTH_TOKEN_ENV_VAR).ok().filter(|value| !value.is_empty());
    if current.as_deref() == required {
        return true;
    }

    let mut command = Command::new(std::env::current_exe().unwrap());
    command.args([test_name, "--exact", "--test-threads=1"]);
    match required {
        Some(value) => command.env(AUTH_TOKEN_ENV_VAR, value),
        None => command.env_remove(AUTH_TOKEN_ENV_VAR),
    };

    let output = command.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success() && stdout.contains("1 passed"),
        "{test_name} failed in a child process:\n{stdout}"
    );
    false
}

/// Resolves the token and builds an adapter the way an application would.
fn adapter_from_env_file(env_file: &Path, host: String) -> Result<RestAdapter, PrintfulApiError> {
    let token = load_auth_token_from(env_file)?;
    let config = PrintfulConfig::builder()
        .auth_token(token)
        .api_host(ApiHost::new(host)?)
        .build()?;
    RestAdapter::new(&config)
}

fn env_file_with_token(token: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# local credentials").unwrap();
    writeln!(file, "{AUTH_TOKEN_ENV_VAR}={token}").unwrap();
    file
}

// ============================================================================
// Env File Tests
// ============================================================================

#[test]
fn test_token_is_read_from_env_file() {
    if !in_token_env("test_token_is_read_from_env_file", None) {
        return;
    }

    let file = env_file_with_token("file-token");

    let token = load_auth_token_from(file.path()).unwrap();
    assert_eq!(token.as_ref(), "file-token");
}

#[test]
fn test_malformed_env_file_is_reported() {
    if !in_token_env("test_malformed_env_file_is_reported", None) {
        return;
    }

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "NOT A VALID LINE 'unterminated").unwrap();

    let result = load_auth_token_from(file.path());
    assert!(matches!(result, Err(ConfigError::EnvFile { .. })));
}

#[tokio::test]
async fn test_missing_token_fails_without_network_call() {
    if !in_token_env("test_missing_token_fails_without_network_call", None) {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let error = adapter_from_env_file(&dir.path().join(".env"), server.uri()).unwrap_err();
    assert!(matches!(
        error,
        PrintfulApiError::Config(ConfigError::MissingEnvVar {
            name: "PRINTFUL_AUTH_TOKEN"
        })
    ));
    assert_eq!(
        error.to_string(),
        "PRINTFUL_AUTH_TOKEN not found in environment variables."
    );
}

// ============================================================================
// Process Environment Tests
// ============================================================================

#[test]
fn test_process_env_takes_precedence_over_env_file() {
    if !in_token_env(
        "test_process_env_takes_precedence_over_env_file",
        Some(PROCESS_TOKEN),
    ) {
        return;
    }

    let file = env_file_with_token("file-token");

    let token = load_auth_token_from(file.path()).unwrap();
    assert_eq!(token.as_ref(), PROCESS_TOKEN);
}

#[test]
fn test_from_env_uses_process_variable() {
    if !in_token_env("test_from_env_uses_process_variable", Some(PROCESS_TOKEN)) {
        return;
    }

    let token = load_auth_token().unwrap();
    assert_eq!(token.as_ref(), PROCESS_TOKEN);

    let config = PrintfulConfig::from_env().unwrap();
    assert_eq!(config.auth_token().as_ref(), PROCESS_TOKEN);
    assert_eq!(config.base_url(), "https://api.printful.com/v2");
}
