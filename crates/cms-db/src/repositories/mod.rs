//! Repository implementations
//!
//! MySQL implementations of the repository traits defined in cms-core.
//! Each repository handles database operations for one area of the CMS.

mod dashboard;
mod error;
mod group;
mod home;
mod media_partner;
mod pages;
mod permission;
mod program;
mod schedule;
mod user;

pub use dashboard::MySqlDashboardRepository;
pub use group::MySqlGroupRepository;
pub use home::MySqlHomeRepository;
pub use media_partner::MySqlMediaPartnerRepository;
pub use pages::MySqlPageRepository;
pub use permission::MySqlPermissionRepository;
pub use program::MySqlProgramRepository;
pub use schedule::MySqlScheduleRepository;
pub use user::MySqlUserRepository;
