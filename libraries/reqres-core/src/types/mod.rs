//! Request and response shapes.

mod envelope;
mod error_body;
mod paged;
mod resource;
mod user;

pub use envelope::{Envelope, SingleResource, SingleUser, Support};
pub use error_body::ErrorBody;
pub use paged::{PagedList, ResourcesList, UsersList};
pub use resource::Resource;
pub use user::{User, UserBuilder};
