//! The normalized result of one Printful API call.

/// The outcome of a successful Printful API call.
///
/// Holds the HTTP status code, the reason phrase, and the parsed JSON body.
/// Results are built by the HTTP client and are read-only afterwards; map
/// [`data`](Self::data) into a domain model such as
/// [`StoreList`](crate::rest::resources::v2::StoreList) to use it.
///
/// A falsy payload (`null`, `false`, `0`, `""`, `{}`, or `[]`) is normalized
/// to an empty JSON array.
///
/// # Example
///
/// ```rust
/// use printful_api::ApiResult;
/// use serde_json::json;
///
/// let result = ApiResult::new(200, "OK", json!({"data": []}));
/// assert_eq!(result.status_code(), 200);
/// assert_eq!(result.message(), "OK");
/// assert_eq!(result.data(), &json!({"data": []}));
///
/// let empty = ApiResult::new(204, "No Content", serde_json::Value::Null);
/// assert_eq!(empty.data(), &json!([]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResult {
    status_code: u16,
    message: String,
    data: serde_json::Value,
}

impl ApiResult {
    /// Creates a new result, normalizing a falsy payload to `[]`.
    #[must_use]
    pub fn new(status_code: u16, message: impl Into<String>, data: serde_json::Value) -> Self {
        let data = if is_empty_payload(&data) {
            serde_json::Value::Array(Vec::new())
        } else {
            data
        };

        Self {
            status_code,
            message: message.into(),
            data,
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the HTTP reason phrase.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the parsed response body.
    #[must_use]
    pub const fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Consumes the result and returns the parsed response body.
    #[must_use]
    pub fn into_data(self) -> serde_json::Value {
        self.data
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status_code >= 200 && self.status_code <= 299
    }
}

fn is_empty_payload(data: &serde_json::Value) -> bool {
    match data {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(value) => !value,
        serde_json::Value::Number(number) => number.as_f64() == Some(0.0),
        serde_json::Value::String(text) => text.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(map) => map.is_empty(),
    }
}
