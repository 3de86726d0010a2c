//! Fluent request builder.

use crate::error::{ClientError, Result};
use reqwest::Method;
use serde::Serialize;
use url::Url;

pub const CONTENT_TYPE_HEADER: &str = "Content-type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Description of one request, independent of the base URL it is sent to.
///
/// # Example
///
/// ```
/// use reqres_client::RequestSpec;
/// use reqres_core::User;
///
/// let user = User::builder().name("morpheus").job("leader").build();
/// let spec = RequestSpec::post("users").json(&user).unwrap();
///
/// let url = spec.url("https://reqres.in/api/").unwrap();
/// assert_eq!(url.as_str(), "https://reqres.in/api/users");
/// assert_eq!(spec.header_value("content-type"), Some("application/json"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl RequestSpec {
    /// Create a spec for `method` on `path`.
    ///
    /// `path` is relative to the base URL and may carry an inline query
    /// string (`users?page=2`).
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a header. Later values for the same name are sent as well.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set `Content-type: application/json` unless a content type is already set.
    pub fn json_content_type(self) -> Self {
        if self.header_value(CONTENT_TYPE_HEADER).is_some() {
            self
        } else {
            self.header(CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON)
        }
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(ClientError::Serialize)?;
        self.body = Some(value);
        Ok(self.json_content_type())
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// First value of a header, matched case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Resolve the target URL: `base_url` + path, plus extra query pairs.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        let mut url =
            Url::parse(&joined).map_err(|e| ClientError::InvalidUrl(format!("{joined}: {e}")))?;

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url)
    }
}
