//! # cms-core
//!
//! Domain layer for the channel CMS: entities, value objects, repository traits
//! and the schedule reconciliation planner.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod schedule;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ContactPage, DashboardCounts, Episode, LiveStream, Masthead, MastheadDocument, MediaPartner,
    Permission, Program, ResponsibleManager, ScheduleItem, SiteSettings, SocialMedia, Trailer,
    User, UserGroup, UserStatus,
};
pub use error::DomainError;
pub use schedule::{plan_day, DayOutcome, DayPlan, ScheduleEntry};
pub use traits::{
    DashboardRepository, GroupRepository, HomeRepository, MediaPartnerRepository,
    PageRepository, PermissionRepository, ProgramRepository, RepoResult, ScheduleRepository,
    UserRepository,
};
pub use value_objects::{permission_values, BroadcastTime, PermissionSet, Weekday};
