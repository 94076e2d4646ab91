//! Axum extractors for request handling
//!
//! Custom extractors for authentication, JSON bodies and path ids.

mod auth;
mod json;
mod path;

pub use auth::{AuthSession, AuthUser};
pub use json::JsonBody;
pub use path::IdPath;
