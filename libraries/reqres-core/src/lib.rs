//! Reqres Core
//!
//! Data-transfer types for the `reqres.in` mock REST API.
//!
//! The same structures are used for outbound request bodies and inbound
//! response bodies, so every field is either optional or defaulted:
//! unknown JSON fields are ignored and missing ones fall back to the empty
//! value (`0`, `""`, empty list).
//!
//! # Example
//!
//! ```rust
//! use reqres_core::{User, UsersList};
//!
//! // Request body
//! let user = User::builder().name("morpheus").job("leader").build();
//! assert_eq!(
//!     serde_json::to_string(&user).unwrap(),
//!     r#"{"name":"morpheus","job":"leader"}"#
//! );
//!
//! // Response body
//! let list: UsersList = serde_json::from_str(
//!     r#"{"page":2,"data":[{"id":7,"first_name":"Michael"}]}"#,
//! )
//! .unwrap();
//! assert_eq!(list.data[0].id, Some(7));
//! assert_eq!(list.data[0].first_name, "Michael");
//! assert_eq!(list.per_page, 0);
//! ```

#![forbid(unsafe_code)]

pub mod types;

pub use types::{
    Envelope, ErrorBody, PagedList, Resource, ResourcesList, SingleResource, SingleUser, Support,
    User, UserBuilder, UsersList,
};
