//! Integration test utilities for the CMS API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API backed by a real MySQL database.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
