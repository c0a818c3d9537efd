//! Web API middleware: authentication and request ID generation.

pub mod auth;
pub mod request_id;

pub use auth::Principal;
