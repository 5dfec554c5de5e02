//! Access module - registration requests reviewed by admins.

mod errors;
mod request;
mod status;

pub use errors::AccessError;
pub use request::{AccessRequest, RegistrationForm};
pub use status::AccessRequestStatus;
