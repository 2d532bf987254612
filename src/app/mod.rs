//! Application-level behavior: the exit message itself and the credential
//! lookup that backs the contributor/sponsor classification.

pub mod credentials;
pub mod exit_message;

pub use credentials::github_api_key;
pub use exit_message::{compose, display};
