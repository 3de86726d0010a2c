//! Single-record responses

use super::{Resource, User};
use serde::{Deserialize, Serialize};

/// Trailer attached to every successful read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub text: String,
}

/// `{"data": ..., "support": ...}` wrapper around one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: T,

    #[serde(default)]
    pub support: Support,
}

/// `GET users/{id}` response
pub type SingleUser = Envelope<User>;

/// `GET unknown/{id}` response
pub type SingleResource = Envelope<Resource>;
