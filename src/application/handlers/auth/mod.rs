//! Sign-in handlers and the access gate.

mod request_sign_in_code;
mod resolve_access_gate;
mod sign_out;
mod verify_sign_in_code;

pub use request_sign_in_code::{RequestSignInCodeCommand, RequestSignInCodeHandler};
pub use resolve_access_gate::{AccessGate, AccessGateError, ResolveAccessGateHandler};
pub use sign_out::SignOutHandler;
pub use verify_sign_in_code::{VerifySignInCodeCommand, VerifySignInCodeHandler};
