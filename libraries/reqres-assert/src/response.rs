//! Fail-fast expectations on a single response.

use crate::mismatch::Mismatch;
use reqres_client::{json_path, ApiResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Entry point for fail-fast assertions: `response.then()...`.
pub trait ResponseAssertExt {
    fn then(&self) -> ResponseAssert<'_>;
}

impl ResponseAssertExt for ApiResponse {
    fn then(&self) -> ResponseAssert<'_> {
        ResponseAssert::new(self)
    }
}

/// Chainable expectations over one [`ApiResponse`].
///
/// The chaining methods panic at the first mismatch, naming the expectation
/// and echoing the response body. The `check_*` methods return the
/// [`Mismatch`] instead, so they can feed a [`crate::SoftAssert`].
#[derive(Debug, Clone, Copy)]
pub struct ResponseAssert<'a> {
    response: &'a ApiResponse,
}

impl<'a> ResponseAssert<'a> {
    pub fn new(response: &'a ApiResponse) -> Self {
        Self { response }
    }

    /// Expect the given status code.
    #[track_caller]
    pub fn status_code(self, expected: u16) -> Self {
        self.enforce(self.check_status(expected))
    }

    /// Expect the JSON field at `path` to equal `expected`.
    #[track_caller]
    pub fn body_field(self, path: &str, expected: impl Into<Value>) -> Self {
        self.enforce(self.check_field(path, &expected.into()))
    }

    /// Expect several fields, checked in order.
    #[track_caller]
    pub fn body_fields<'p, I, V>(self, expectations: I) -> Self
    where
        I: IntoIterator<Item = (&'p str, V)>,
        V: Into<Value>,
    {
        for (path, expected) in expectations {
            self.enforce(self.check_field(path, &expected.into()));
        }
        self
    }

    /// Expect the raw body to be exactly `expected`.
    #[track_caller]
    pub fn body_eq(self, expected: &str) -> Self {
        self.enforce(self.check_body(expected))
    }

    /// Expect an empty body.
    #[track_caller]
    pub fn body_empty(self) -> Self {
        self.body_eq("")
    }

    /// Deserialize the body once all expectations have passed.
    pub fn extract<T: DeserializeOwned>(self) -> reqres_client::Result<T> {
        self.response.json()
    }

    pub fn check_status(&self, expected: u16) -> Result<(), Mismatch> {
        let actual = self.response.status_code();
        if actual == expected {
            Ok(())
        } else {
            Err(Mismatch::new(
                "status code",
                expected.to_string(),
                actual.to_string(),
            ))
        }
    }

    pub fn check_field(&self, path: &str, expected: &Value) -> Result<(), Mismatch> {
        let root: Value = match serde_json::from_str(self.response.text()) {
            Ok(root) => root,
            Err(_) => {
                return Err(Mismatch::new(
                    path,
                    expected.to_string(),
                    format!("<non-JSON body {:?}>", self.response.text()),
                ))
            }
        };

        match json_path(&root, path) {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(Mismatch::new(path, expected.to_string(), actual.to_string())),
            None => Err(Mismatch::new(path, expected.to_string(), "<missing>")),
        }
    }

    pub fn check_body(&self, expected: &str) -> Result<(), Mismatch> {
        let actual = self.response.text();
        if actual == expected {
            Ok(())
        } else {
            Err(Mismatch::new(
                "body",
                format!("{expected:?}"),
                format!("{actual:?}"),
            ))
        }
    }

    #[track_caller]
    fn enforce(self, result: Result<(), Mismatch>) -> Self {
        match result {
            Ok(()) => self,
            Err(mismatch) => {
                debug!(%mismatch, "Expectation failed");
                panic!(
                    "{mismatch}\nresponse status: {}\nresponse body: {}",
                    self.response.status(),
                    self.response.text()
                );
            }
        }
    }
}
