//! Database models - SQLx-compatible structs for MySQL tables

mod home;
mod media_partner;
mod pages;
mod program;
mod schedule;
mod user;

pub use home::{EpisodeModel, TrailerModel};
pub use media_partner::MediaPartnerModel;
pub use pages::{ContactModel, DashboardModel, LiveStreamModel, MastheadModel, SocialMediaModel};
pub use program::ProgramModel;
pub use schedule::ScheduleItemModel;
pub use user::{GroupModel, GroupPermissionModel, PermissionModel, UserModel};
