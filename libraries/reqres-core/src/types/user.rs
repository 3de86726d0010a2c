//! User type

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A reqres user.
///
/// Write endpoints receive a subset (`name`/`job` or `email`/`password`) and
/// echo it back with server-assigned fields; read endpoints return the
/// profile fields. Absent optionals are left out of the serialized body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric id. `POST users` answers with a string id (`"123"`), every
    /// other endpoint with a number; both are accepted.
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Session token returned by register and login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avatar: String,

    /// ISO timestamp set by `POST users`
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,

    /// ISO timestamp set by `PUT`/`PATCH users/{id}`
    #[serde(
        rename = "updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl User {
    /// Start building a request body.
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }
}

/// Fluent builder for [`User`] request bodies.
#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.user.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.user.name = Some(name.into());
        self
    }

    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.user.job = Some(job.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.user.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.user.password = Some(password.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.user.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.user.last_name = last_name.into();
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.user.avatar = avatar.into();
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("user id is not numeric: {text:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_omits_unset_fields() {
        let user = User::builder().name("morpheus").job("leader").build();
        let body = serde_json::to_value(&user).unwrap();
        assert_eq!(body, json!({"name": "morpheus", "job": "leader"}));

        let creds = User::builder().email("sydney@fife").build();
        let body = serde_json::to_value(&creds).unwrap();
        assert_eq!(body, json!({"email": "sydney@fife"}));
    }

    #[test]
    fn test_profile_fields_use_wire_names() {
        let user: User = serde_json::from_value(json!({
            "id": 2,
            "email": "janet.weaver@reqres.in",
            "first_name": "Janet",
            "last_name": "Weaver",
            "avatar": "https://reqres.in/img/faces/2-image.jpg"
        }))
        .unwrap();

        assert_eq!(user.id, Some(2));
        assert_eq!(user.email.as_deref(), Some("janet.weaver@reqres.in"));
        assert_eq!(user.first_name, "Janet");
        assert_eq!(user.last_name, "Weaver");
        assert_eq!(user.avatar, "https://reqres.in/img/faces/2-image.jpg");
        assert!(user.token.is_none());
    }

    #[test]
    fn test_create_response_with_string_id() {
        let user: User = serde_json::from_value(json!({
            "name": "morpheus",
            "job": "leader",
            "id": "123",
            "createdAt": "2024-05-01T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(user.id, Some(123));
        assert_eq!(user.created_at.as_deref(), Some("2024-05-01T10:00:00.000Z"));
        assert!(user.updated_at.is_none());
    }

    #[test]
    fn test_non_numeric_string_id_rejected() {
        let result: Result<User, _> = serde_json::from_value(json!({"id": "abc"}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("not numeric"), "unexpected error: {err}");
    }

    #[test]
    fn test_null_id_is_none() {
        let user: User = serde_json::from_value(json!({"id": null})).unwrap();
        assert!(user.id.is_none());
    }

    #[test]
    fn test_missing_fields_default_and_unknown_ignored() {
        let user: User = serde_json::from_value(json!({"nickname": "neo"})).unwrap();
        assert_eq!(user, User::default());
        assert_eq!(user.first_name, "");
    }

    #[test]
    fn test_register_response() {
        let user: User =
            serde_json::from_value(json!({"id": 4, "token": "QpwL5tke4Pnpja7X4"})).unwrap();
        assert_eq!(user.id, Some(4));
        assert_eq!(user.token.as_deref(), Some("QpwL5tke4Pnpja7X4"));
    }
}
