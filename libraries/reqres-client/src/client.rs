//! Main reqres client.

use crate::auth::AuthClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::request::RequestSpec;
use crate::resources::ResourcesClient;
use crate::response::ApiResponse;
use crate::users::UsersClient;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the configured API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Client for a reqres service.
///
/// Every call is a single request/response round trip: no retries, no
/// timeout beyond the HTTP client's defaults.
///
/// # Example
///
/// ```ignore
/// use reqres_client::{ClientConfig, ReqresClient, RequestSpec};
///
/// let client = ReqresClient::new(ClientConfig::default())?;
///
/// // Raw request
/// let response = client.send(RequestSpec::get("users/23")).await?;
/// assert_eq!(response.status_code(), 404);
///
/// // Typed helper
/// let response = client.resources().get(2).await?;
/// assert_eq!(response.field("data.name")?, Some("fuchsia rose".into()));
/// ```
#[derive(Debug, Clone)]
pub struct ReqresClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ReqresClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.normalized_base_url();

        let http = Client::builder()
            .user_agent(format!("reqres-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        debug!(base_url = %base_url, api_key = config.api_key.is_some(), "Created reqres client");

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Create a client from `reqres.toml` and `REQRES_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::load()?)
    }

    /// Normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL the given spec would be sent to.
    pub fn url_for(&self, spec: &RequestSpec) -> Result<Url> {
        spec.url(&self.base_url)
    }

    /// Send a request and read the whole response.
    ///
    /// Any status code is returned as a response; only transport failures
    /// are errors.
    pub async fn send(&self, spec: RequestSpec) -> Result<ApiResponse> {
        let url = self.url_for(&spec)?;

        debug!(
            method = %spec.method(),
            url = %url,
            headers = ?spec.headers(),
            body = ?spec.body(),
            "Sending request"
        );

        let mut request = self.http.request(spec.method().clone(), url.clone());
        for (name, value) in spec.headers() {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key.as_str());
        }
        if let Some(body) = spec.body() {
            let bytes = serde_json::to_vec(body).map_err(ClientError::Serialize)?;
            request = request.body(bytes);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                warn!(url = %url, error = %e, "Service unreachable");
                ClientError::ServiceUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let response = ApiResponse::read(response).await?;

        debug!(
            method = %spec.method(),
            url = %url,
            status = %response.status(),
            body = %response.text(),
            "Received response"
        );

        Ok(response)
    }

    /// User endpoints.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(self)
    }

    /// Resource (`/unknown`) endpoints.
    pub fn resources(&self) -> ResourcesClient<'_> {
        ResourcesClient::new(self)
    }

    /// Register and login endpoints.
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(self)
    }
}
