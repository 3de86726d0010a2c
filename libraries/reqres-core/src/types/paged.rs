//! Paginated list responses

use super::{Resource, Support, User};
use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagedList<T> {
    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub per_page: u32,

    #[serde(default)]
    pub total: u32,

    #[serde(default)]
    pub total_pages: u32,

    /// Items on this page, in server order
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    #[serde(default)]
    pub support: Support,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 0,
            total: 0,
            total_pages: 0,
            data: Vec::new(),
            support: Support::default(),
        }
    }
}

impl<T> PagedList<T> {
    /// First item on the page, if any.
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Whether the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// `GET users` response
pub type UsersList = PagedList<User>;

/// `GET unknown` response
pub type ResourcesList = PagedList<Resource>;
