//! Reqres Client
//!
//! Thin HTTP client for the `reqres.in` mock REST API.
//!
//! # Features
//!
//! - **Request building**: fluent [`RequestSpec`] for GET/POST/PUT/PATCH/DELETE
//!   with JSON bodies and headers
//! - **Dispatch**: [`ReqresClient::send`] resolves a spec against the
//!   configured base URL and returns the full [`ApiResponse`]
//! - **Endpoints**: typed helpers for users, resources and auth
//! - **Configuration**: `reqres.toml` plus `REQRES_*` environment overrides
//!
//! Non-2xx statuses are not errors: a 404 or 400 is returned as an ordinary
//! [`ApiResponse`] so callers can assert on it. Only transport, URL and
//! parse failures surface as [`ClientError`].
//!
//! # Example
//!
//! ```ignore
//! use reqres_client::{ClientConfig, ReqresClient};
//! use reqres_core::{User, UsersList};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReqresClient::new(ClientConfig::default())?;
//!
//!     let response = client.users().list(2).await?;
//!     let page: UsersList = response.json()?;
//!     println!("{} users on page {}", page.data.len(), page.page);
//!
//!     let user = User::builder().name("morpheus").job("leader").build();
//!     let created = client.users().create(&user).await?;
//!     println!("created: {}", created.status());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod error;
mod request;
mod resources;
mod response;
mod users;

pub use client::{ReqresClient, API_KEY_HEADER};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use request::{RequestSpec, CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON};
pub use response::{json_path, ApiResponse};

// Re-export sub-clients and the HTTP types that appear in the public API
pub use auth::AuthClient;
pub use reqwest::{Method, StatusCode};
pub use resources::ResourcesClient;
pub use users::UsersClient;
