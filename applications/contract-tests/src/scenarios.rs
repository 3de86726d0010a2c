//! Scenario catalog: one request and its expected response per endpoint.

use reqres_client::{Method, RequestSpec};
use reqres_core::User;
use serde_json::Value;

/// Token reqres hands out for `eve.holt@reqres.in`.
pub const EVE_TOKEN: &str = "QpwL5tke4Pnpja7X4";

/// A single request/response contract.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub method: Method,
    /// Relative to the base URL, inline query included
    pub path: &'static str,
    pub body: Option<User>,
    /// Send `Content-type: application/json` even without a body
    pub json_header: bool,
    pub expected_status: u16,
    /// Dotted JSON paths and their expected values
    pub expected_fields: Vec<(&'static str, Value)>,
    /// Exact body text, when the contract pins it
    pub expected_body: Option<&'static str>,
}

impl Scenario {
    fn new(name: &'static str, method: Method, path: &'static str, expected_status: u16) -> Self {
        Self {
            name,
            method,
            path,
            body: None,
            json_header: false,
            expected_status,
            expected_fields: Vec::new(),
            expected_body: None,
        }
    }

    fn body(mut self, body: User) -> Self {
        self.body = Some(body);
        self
    }

    fn json_header(mut self) -> Self {
        self.json_header = true;
        self
    }

    fn field(mut self, path: &'static str, expected: impl Into<Value>) -> Self {
        self.expected_fields.push((path, expected.into()));
        self
    }

    fn body_text(mut self, text: &'static str) -> Self {
        self.expected_body = Some(text);
        self
    }

    /// Whether the scenario only reads (safe to repeat for idempotence checks).
    pub fn is_read(&self) -> bool {
        self.method == Method::GET
    }

    /// Build the request for this scenario.
    pub fn request(&self) -> reqres_client::Result<RequestSpec> {
        let spec = RequestSpec::new(self.method.clone(), self.path);
        let spec = match &self.body {
            Some(body) => spec.json(body)?,
            None if self.json_header => spec.json_content_type(),
            None => spec,
        };
        Ok(spec)
    }
}

/// Every contract the suite checks, in a stable order.
pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario::new("create_user", Method::POST, "users", 201)
            .body(User::builder().name("morpheus").job("leader").build())
            .field("name", "morpheus")
            .field("job", "leader"),
        Scenario::new("list_users", Method::GET, "users?page=2", 200)
            .field("page", 2)
            .field("data.0.id", 7)
            .field("data.0.first_name", "Michael")
            .field("data.0.last_name", "Lawson")
            .field("data.0.email", "michael.lawson@reqres.in")
            .field("data.0.avatar", "https://reqres.in/img/faces/7-image.jpg"),
        Scenario::new("single_user", Method::GET, "users/2", 200)
            .field("data.id", 2)
            .field("data.email", "janet.weaver@reqres.in")
            .field("data.first_name", "Janet")
            .field("data.last_name", "Weaver")
            .field("data.avatar", "https://reqres.in/img/faces/2-image.jpg"),
        Scenario::new("single_user_not_found", Method::GET, "users/23", 404).body_text("{}"),
        Scenario::new("list_resources", Method::GET, "unknown", 200)
            .field("data.0.id", 1)
            .field("data.0.name", "cerulean")
            .field("data.0.year", 2000)
            .field("data.0.color", "#98B2D1")
            .field("data.0.pantone_value", "15-4020"),
        Scenario::new("single_resource", Method::GET, "unknown/2", 200)
            .field("data.id", 2)
            .field("data.name", "fuchsia rose")
            .field("data.year", 2001)
            .field("data.color", "#C74375")
            .field("data.pantone_value", "17-2031"),
        Scenario::new("single_resource_not_found", Method::GET, "unknown/23", 404)
            .body_text("{}"),
        Scenario::new("update_user", Method::PUT, "users/2", 200)
            .body(User::builder().name("morpheus").job("zion resident").build())
            .field("name", "morpheus")
            .field("job", "zion resident"),
        Scenario::new("patch_user", Method::PATCH, "users/2", 200)
            .body(User::builder().name("morpheus").job("zion resident").build())
            .field("name", "morpheus")
            .field("job", "zion resident"),
        Scenario::new("delete_user", Method::DELETE, "users/2", 204)
            .json_header()
            .body_text(""),
        Scenario::new("register_successful", Method::POST, "register", 200)
            .body(
                User::builder()
                    .email("eve.holt@reqres.in")
                    .password("pistol")
                    .build(),
            )
            .field("id", 4)
            .field("token", EVE_TOKEN),
        Scenario::new("register_unsuccessful", Method::POST, "register", 400)
            .body(User::builder().email("sydney@fife").build())
            .field("error", "Missing password"),
        Scenario::new("login_successful", Method::POST, "login", 200)
            .body(
                User::builder()
                    .email("eve.holt@reqres.in")
                    .password("cityslicka")
                    .build(),
            )
            .field("token", EVE_TOKEN),
        Scenario::new("login_unsuccessful", Method::POST, "login", 400)
            .body(User::builder().email("peter@klaven").build())
            .field("error", "Missing password"),
        Scenario::new("delayed_list_users", Method::GET, "users?delay=3", 200)
            .field("data.0.id", 1)
            .field("data.0.first_name", "George")
            .field("data.0.last_name", "Bluth")
            .field("data.0.email", "george.bluth@reqres.in")
            .field("data.0.avatar", "https://reqres.in/img/faces/1-image.jpg"),
    ]
}

/// Look up a catalog entry by name.
pub fn scenario(name: &str) -> Option<Scenario> {
    catalog().into_iter().find(|s| s.name == name)
}
