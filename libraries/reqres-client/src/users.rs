//! User endpoints.

use crate::client::ReqresClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::response::ApiResponse;
use reqres_core::User;
use tracing::info;

/// Sub-client for `/users`.
pub struct UsersClient<'a> {
    client: &'a ReqresClient,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(client: &'a ReqresClient) -> Self {
        Self { client }
    }

    /// `POST users`
    pub async fn create(&self, user: &User) -> Result<ApiResponse> {
        info!(name = ?user.name, job = ?user.job, "Creating user");
        self.client.send(RequestSpec::post("users").json(user)?).await
    }

    /// `GET users?page={page}`
    pub async fn list(&self, page: u32) -> Result<ApiResponse> {
        self.client
            .send(RequestSpec::get("users").query("page", page))
            .await
    }

    /// `GET users?delay={delay_secs}`; the service holds the response back.
    pub async fn list_delayed(&self, delay_secs: u32) -> Result<ApiResponse> {
        info!(delay_secs, "Requesting delayed user list");
        self.client
            .send(RequestSpec::get("users").query("delay", delay_secs))
            .await
    }

    /// `GET users/{id}`
    pub async fn get(&self, id: i64) -> Result<ApiResponse> {
        self.client.send(RequestSpec::get(format!("users/{id}"))).await
    }

    /// `PUT users/{id}`
    pub async fn update(&self, id: i64, user: &User) -> Result<ApiResponse> {
        info!(id, "Replacing user");
        self.client
            .send(RequestSpec::put(format!("users/{id}")).json(user)?)
            .await
    }

    /// `PATCH users/{id}`
    pub async fn patch(&self, id: i64, user: &User) -> Result<ApiResponse> {
        info!(id, "Patching user");
        self.client
            .send(RequestSpec::patch(format!("users/{id}")).json(user)?)
            .await
    }

    /// `DELETE users/{id}`
    pub async fn delete(&self, id: i64) -> Result<ApiResponse> {
        info!(id, "Deleting user");
        self.client
            .send(RequestSpec::delete(format!("users/{id}")).json_content_type())
            .await
    }
}
