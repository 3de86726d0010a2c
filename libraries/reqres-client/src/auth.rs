//! Register and login endpoints.

use crate::client::ReqresClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::response::ApiResponse;
use reqres_core::User;
use tracing::{debug, warn};

/// Sub-client for `/register` and `/login`.
pub struct AuthClient<'a> {
    client: &'a ReqresClient,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(client: &'a ReqresClient) -> Self {
        Self { client }
    }

    /// `POST register` with `email` and `password`.
    pub async fn register(&self, credentials: &User) -> Result<ApiResponse> {
        self.submit("register", credentials).await
    }

    /// `POST login` with `email` and `password`.
    pub async fn login(&self, credentials: &User) -> Result<ApiResponse> {
        self.submit("login", credentials).await
    }

    async fn submit(&self, path: &str, credentials: &User) -> Result<ApiResponse> {
        debug!(path, email = ?credentials.email, "Submitting credentials");

        let response = self
            .client
            .send(RequestSpec::post(path).json(credentials)?)
            .await?;

        if !response.status().is_success() {
            warn!(
                path,
                status = %response.status(),
                body = %response.text(),
                "Credentials rejected"
            );
        }

        Ok(response)
    }
}
