//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod group;
pub mod home;
pub mod media_partner;
pub mod pages;
pub mod permission;
pub mod program;
pub mod schedule;
pub mod upload;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};
pub use group::GroupService;
pub use home::HomeService;
pub use media_partner::MediaPartnerService;
pub use pages::PageService;
pub use permission::{PermissionService, Session};
pub use program::ProgramService;
pub use schedule::ScheduleService;
pub use upload::{generate_file_name, sanitize_destination, UploadService};
pub use user::UserService;
