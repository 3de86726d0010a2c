//! Resource endpoints (served under `/unknown`).

use crate::client::ReqresClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::response::ApiResponse;

/// Sub-client for `/unknown`.
pub struct ResourcesClient<'a> {
    client: &'a ReqresClient,
}

impl<'a> ResourcesClient<'a> {
    pub(crate) fn new(client: &'a ReqresClient) -> Self {
        Self { client }
    }

    /// `GET unknown`
    pub async fn list(&self) -> Result<ApiResponse> {
        self.client.send(RequestSpec::get("unknown")).await
    }

    /// `GET unknown/{id}`
    pub async fn get(&self, id: i64) -> Result<ApiResponse> {
        self.client
            .send(RequestSpec::get(format!("unknown/{id}")))
            .await
    }
}
