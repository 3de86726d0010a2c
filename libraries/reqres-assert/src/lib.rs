//! Reqres Assert
//!
//! Assertions over [`ApiResponse`](reqres_client::ApiResponse) values, in two modes:
//!
//! - **Fail-fast**: [`ResponseAssert`], reached through
//!   [`ResponseAssertExt::then`]. The first mismatch panics.
//! - **Soft**: [`SoftAssert`] records every comparison and reports all
//!   failures together at [`SoftAssert::assert_all`]. [`SoftScope`] does the
//!   same but also reports on drop, so a forgotten flush cannot lose
//!   failures.
//!
//! Expected values are compared as JSON, so `2` and `"2"` are different.
//!
//! # Example
//!
//! ```
//! use reqres_assert::{ResponseAssertExt, SoftAssert};
//! use reqres_client::{ApiResponse, StatusCode};
//!
//! let response = ApiResponse::new(
//!     StatusCode::CREATED,
//!     r#"{"name":"morpheus","job":"leader","id":"123"}"#,
//! );
//!
//! response
//!     .then()
//!     .status_code(201)
//!     .body_field("name", "morpheus")
//!     .body_field("job", "leader");
//!
//! let mut soft = SoftAssert::new().scoped();
//! soft.assert_eq(response.status_code(), 201, "status");
//! soft.assert_all();
//! ```

mod mismatch;
mod response;
mod soft;

pub use mismatch::{Mismatch, SoftAssertionError};
pub use response::{ResponseAssert, ResponseAssertExt};
pub use soft::{SoftAssert, SoftScope};
