//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod dashboard;
pub mod groups;
pub mod health;
pub mod home;
pub mod pages;
pub mod press;
pub mod programs;
pub mod schedule;
pub mod upload;
pub mod users;
