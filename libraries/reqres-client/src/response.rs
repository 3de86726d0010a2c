//! Buffered HTTP response.

use crate::error::{ClientError, Result};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A fully read response: status, headers and body text.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl ApiResponse {
    /// Build a response by hand, e.g. for assertions in tests.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Whether the body is empty (e.g. `204 No Content`).
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Deserialize the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|source| ClientError::Parse {
            context: format!(
                "{} body as {}",
                self.status,
                std::any::type_name::<T>()
            ),
            source,
        })
    }

    /// Parse the body as untyped JSON.
    pub fn json_value(&self) -> Result<Value> {
        self.json()
    }

    /// Extract a field by dotted path (`data.first_name`, `data.0.id`).
    ///
    /// Returns `Ok(None)` when the body is JSON but the path does not exist.
    pub fn field(&self, path: &str) -> Result<Option<Value>> {
        let root = self.json_value()?;
        Ok(json_path(&root, path).cloned())
    }
}

/// Walk `value` along a dotted path. Numeric segments index into arrays;
/// an empty path returns `value` itself.
pub fn json_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }

    path.split('.').try_fold(value, |current, segment| match current {
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        Value::Object(map) => map.get(segment),
        _ => None,
    })
}
