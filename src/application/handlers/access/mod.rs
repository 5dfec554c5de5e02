//! Access request handlers.
//!
//! ## Commands
//! - Submit a registration (no session needed)
//! - Approve a request and activate matching profiles (admin)
//! - Reject a request (admin)
//!
//! ## Queries
//! - Pending requests, newest first (admin)

mod approve_access_request;
mod list_pending_requests;
mod reject_access_request;
mod submit_access_request;

// Commands
pub use approve_access_request::{
    ActivationOutcome, ApproveAccessRequestCommand, ApproveAccessRequestHandler,
    ApproveAccessRequestResult,
};
pub use reject_access_request::{RejectAccessRequestCommand, RejectAccessRequestHandler};
pub use submit_access_request::{SubmitAccessRequestCommand, SubmitAccessRequestHandler, SubmitOutcome};

// Queries
pub use list_pending_requests::ListPendingRequestsHandler;
