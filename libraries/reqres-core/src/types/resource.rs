//! Resource type

use serde::{Deserialize, Serialize};

/// A colour resource served under `/unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: i32,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub year: i64,

    /// Hex colour, e.g. `#C74375`
    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub pantone_value: String,
}
