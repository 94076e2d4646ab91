//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    ContactPage, DashboardCounts, Episode, LiveStream, Masthead, MediaPartner, Permission,
    Program, ScheduleItem, SiteSettings, SocialMedia, Trailer, User, UserGroup,
};
use crate::error::DomainError;
use crate::schedule::{DayOutcome, ScheduleEntry};
use crate::value_objects::Weekday;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List all users with their group name
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Check if email is already taken by another user
    async fn email_exists(&self, email: &str, except_id: Option<i64>) -> RepoResult<bool>;

    /// Create a new user, returning the assigned id
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<i64>;

    /// Update name, email, group and status; `false` if no such user
    async fn update(&self, user: &User) -> RepoResult<bool>;

    /// Delete a user; `false` if no such user
    async fn delete(&self, id: i64) -> RepoResult<bool>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Group Repository
// ============================================================================

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// List all groups with member counts and granted permissions
    async fn list(&self) -> RepoResult<Vec<UserGroup>>;

    /// Find group by ID (with member count and permissions)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<UserGroup>>;

    /// Create a new group, returning the assigned id
    async fn create(&self, group: &UserGroup) -> RepoResult<i64>;

    /// Update name and description; `false` if no such group
    async fn update(&self, group: &UserGroup) -> RepoResult<bool>;

    /// Replace the group's permissions with exactly `permission_ids`
    ///
    /// Runs as one transaction and returns the stored permissions.
    async fn replace_permissions(
        &self,
        group_id: i64,
        permission_ids: &[i64],
    ) -> RepoResult<Vec<Permission>>;
}

// ============================================================================
// Permission Repository
// ============================================================================

#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// The full permission catalog
    async fn list(&self) -> RepoResult<Vec<Permission>>;

    /// Permissions granted to a group
    async fn find_by_group(&self, group_id: i64) -> RepoResult<Vec<Permission>>;
}

// ============================================================================
// Program Repository
// ============================================================================

#[async_trait]
pub trait ProgramRepository: Send + Sync {
    async fn list(&self) -> RepoResult<Vec<Program>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Program>>;

    /// Insert a program, returning the assigned id
    async fn create(&self, program: &Program) -> RepoResult<i64>;

    /// Overwrite all editable fields; `false` if no such program
    async fn update(&self, program: &Program) -> RepoResult<bool>;

    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Schedule Repository
// ============================================================================

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// All slots, ordered by day and time
    async fn list(&self) -> RepoResult<Vec<ScheduleItem>>;

    /// Reconcile one day against the submitted entries
    ///
    /// Implementations read the day's rows, plan with
    /// [`plan_day`](crate::schedule::plan_day) and apply the plan inside a
    /// single transaction.
    async fn reconcile_day(
        &self,
        day: Weekday,
        entries: &[ScheduleEntry],
    ) -> RepoResult<DayOutcome>;

    /// Delete one slot; `false` if no such slot
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Home Repository
// ============================================================================

#[async_trait]
pub trait HomeRepository: Send + Sync {
    /// Active trailers, newest first
    async fn active_trailers(&self) -> RepoResult<Vec<Trailer>>;

    /// Active episodes, newest first
    async fn active_episodes(&self) -> RepoResult<Vec<Episode>>;

    /// Upsert trailers and episodes in one transaction
    ///
    /// Items with a positive id are updated, the rest inserted.
    async fn save(&self, trailers: &[Trailer], episodes: &[Episode]) -> RepoResult<()>;

    async fn delete_trailer(&self, id: i64) -> RepoResult<bool>;

    async fn delete_episode(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Media Partner Repository
// ============================================================================

#[async_trait]
pub trait MediaPartnerRepository: Send + Sync {
    async fn list(&self) -> RepoResult<Vec<MediaPartner>>;

    async fn create(&self, partner: &MediaPartner) -> RepoResult<i64>;

    /// Update every partner in one transaction, returning the number written
    async fn update_all(&self, partners: &[MediaPartner]) -> RepoResult<usize>;

    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Page Repository (singleton rows)
// ============================================================================

#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn contact(&self) -> RepoResult<ContactPage>;

    async fn update_contact(&self, contact: &ContactPage) -> RepoResult<()>;

    async fn site_settings(&self) -> RepoResult<SiteSettings>;

    async fn update_site_settings(&self, settings: &SiteSettings) -> RepoResult<()>;

    async fn social_media(&self) -> RepoResult<SocialMedia>;

    async fn update_social_media(&self, social: &SocialMedia) -> RepoResult<()>;

    async fn masthead(&self) -> RepoResult<Masthead>;

    async fn save_masthead(&self, masthead: &Masthead) -> RepoResult<()>;

    async fn live_stream(&self) -> RepoResult<LiveStream>;

    async fn update_live_stream(&self, stream: &LiveStream) -> RepoResult<()>;
}

// ============================================================================
// Dashboard Repository
// ============================================================================

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn counts(&self) -> RepoResult<DashboardCounts>;
}
