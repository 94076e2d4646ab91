//! Domain entities - core business objects

mod dashboard;
mod home;
mod media_partner;
mod pages;
mod permission;
mod program;
mod schedule;
mod user;

pub use dashboard::DashboardCounts;
pub use home::{Episode, Trailer};
pub use media_partner::MediaPartner;
pub use pages::{
    ContactPage, LiveStream, Masthead, MastheadDocument, ResponsibleManager, SiteSettings,
    SocialMedia,
};
pub use permission::Permission;
pub use program::Program;
pub use schedule::ScheduleItem;
pub use user::{User, UserGroup, UserStatus};
