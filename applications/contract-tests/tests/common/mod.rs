//! Local stand-in for the reqres service, serving its canned fixture data.

#![allow(dead_code)]

use reqres_client::{ClientConfig, ReqresClient};
use reqres_contract_tests::scenarios::EVE_TOKEN;
use serde_json::{json, Map, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const CREATED_AT: &str = "2024-05-01T10:00:00.000Z";
pub const UPDATED_AT: &str = "2024-05-01T10:05:00.000Z";

/// Start a mock server with every reqres endpoint the suite touches.
pub async fn start_reqres() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::users_page(2)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("delay", "3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::users_page(1))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::single(fixtures::user(2))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/23"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/unknown"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::resources_page()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/unknown/2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::single(fixtures::resource(2))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/unknown/23"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(EchoUser::created())
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/users/2"))
        .respond_with(EchoUser::updated())
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/2"))
        .respond_with(EchoUser::updated())
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(Credentials::register())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(Credentials::login())
        .mount(&server)
        .await;

    server
}

/// Client pointed at the mock server's `/api/` prefix.
pub fn client_for(server: &MockServer) -> ReqresClient {
    let config = ClientConfig::new(format!("{}/api/", server.uri()));
    ReqresClient::new(config).expect("mock server uri is a valid base url")
}

fn request_object(request: &Request) -> Option<Map<String, Value>> {
    match serde_json::from_slice(&request.body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Echoes the posted user back with server-assigned fields, like reqres does.
struct EchoUser {
    status: u16,
    created: bool,
}

impl EchoUser {
    fn created() -> Self {
        Self {
            status: 201,
            created: true,
        }
    }

    fn updated() -> Self {
        Self {
            status: 200,
            created: false,
        }
    }
}

impl Respond for EchoUser {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut body = request_object(request).unwrap_or_default();
        if self.created {
            body.insert("id".into(), json!("123"));
            body.insert("createdAt".into(), json!(CREATED_AT));
        } else {
            body.insert("updatedAt".into(), json!(UPDATED_AT));
        }
        ResponseTemplate::new(self.status).set_body_json(Value::Object(body))
    }
}

/// Register/login semantics: known accounts get a token, anything missing
/// a field is a 400 with reqres' error text.
struct Credentials {
    register: bool,
}

impl Credentials {
    fn register() -> Self {
        Self { register: true }
    }

    fn login() -> Self {
        Self { register: false }
    }
}

impl Respond for Credentials {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = request_object(request).unwrap_or_default();
        let field = |name: &str| body.get(name).and_then(Value::as_str);

        let error =
            |message: &str| ResponseTemplate::new(400).set_body_json(json!({"error": message}));

        let Some(email) = field("email") else {
            return error("Missing email or username");
        };
        if field("password").is_none() {
            return error("Missing password");
        }

        match fixtures::user_id_by_email(email) {
            Some(id) if self.register => {
                ResponseTemplate::new(200).set_body_json(json!({"id": id, "token": EVE_TOKEN}))
            }
            Some(_) => ResponseTemplate::new(200).set_body_json(json!({"token": EVE_TOKEN})),
            None if self.register => error("Note: Only defined users succeed registration"),
            None => error("user not found"),
        }
    }
}

/// The service's static sample records.
pub mod fixtures {
    use serde_json::{json, Value};

    const USERS: [(i64, &str, &str); 12] = [
        (1, "George", "Bluth"),
        (2, "Janet", "Weaver"),
        (3, "Emma", "Wong"),
        (4, "Eve", "Holt"),
        (5, "Charles", "Morris"),
        (6, "Tracey", "Ramos"),
        (7, "Michael", "Lawson"),
        (8, "Lindsay", "Ferguson"),
        (9, "Tobias", "Funke"),
        (10, "Byron", "Fields"),
        (11, "George", "Edwards"),
        (12, "Rachel", "Howell"),
    ];

    const RESOURCES: [(i64, &str, i64, &str, &str); 12] = [
        (1, "cerulean", 2000, "#98B2D1", "15-4020"),
        (2, "fuchsia rose", 2001, "#C74375", "17-2031"),
        (3, "true red", 2002, "#BF1932", "19-1664"),
        (4, "aqua sky", 2003, "#7BC4C4", "14-4811"),
        (5, "tigerlily", 2004, "#E2583E", "17-1456"),
        (6, "blue turquoise", 2005, "#53B0AE", "15-5217"),
        (7, "sand dollar", 2006, "#DECDBE", "13-1106"),
        (8, "chili pepper", 2007, "#9B1B30", "19-1557"),
        (9, "blue iris", 2008, "#5A5B9F", "18-3943"),
        (10, "mimosa", 2009, "#F0C05A", "14-0848"),
        (11, "turquoise", 2010, "#45B5AA", "15-5519"),
        (12, "honeysuckle", 2011, "#D94F70", "18-2120"),
    ];

    const PER_PAGE: usize = 6;

    pub fn support() -> Value {
        json!({
            "url": "https://reqres.in/#support-heading",
            "text": "To keep ReqRes free, contributions towards server costs are appreciated!"
        })
    }

    pub fn user(id: i64) -> Value {
        let (id, first, last) = USERS[usize::try_from(id - 1).unwrap_or(0)];
        json!({
            "id": id,
            "email": format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
            "first_name": first,
            "last_name": last,
            "avatar": format!("https://reqres.in/img/faces/{id}-image.jpg")
        })
    }

    pub fn user_id_by_email(email: &str) -> Option<i64> {
        (1..=12).find(|&id| user(id)["email"] == email)
    }

    pub fn resource(id: i64) -> Value {
        let (id, name, year, color, pantone) = RESOURCES[usize::try_from(id - 1).unwrap_or(0)];
        json!({
            "id": id,
            "name": name,
            "year": year,
            "color": color,
            "pantone_value": pantone
        })
    }

    fn page(number: usize, items: Vec<Value>) -> Value {
        let total = items.len();
        let data: Vec<Value> = items
            .into_iter()
            .skip((number - 1) * PER_PAGE)
            .take(PER_PAGE)
            .collect();
        json!({
            "page": number,
            "per_page": PER_PAGE,
            "total": total,
            "total_pages": total.div_ceil(PER_PAGE),
            "data": data,
            "support": support()
        })
    }

    pub fn users_page(number: usize) -> Value {
        page(number, (1..=12).map(user).collect())
    }

    pub fn resources_page() -> Value {
        page(1, (1..=12).map(resource).collect())
    }

    pub fn single(data: Value) -> Value {
        json!({"data": data, "support": support()})
    }
}
