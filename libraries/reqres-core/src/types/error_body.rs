//! Error response body

use serde::{Deserialize, Serialize};

/// Body of a 400 response, e.g. `{"error": "Missing password"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}
