//! Permission service
//!
//! Builds the per-request [`Session`]: the caller's user row and the
//! permissions of their group, read from the database on every protected
//! request. Nothing the panel caches locally is trusted.

use cms_common::AppError;
use cms_core::entities::{Permission, User};
use cms_core::{DomainError, PermissionSet};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authenticated caller with their current permissions
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
    permissions: Vec<Permission>,
    granted: PermissionSet,
}

impl Session {
    pub fn new(user: User, permissions: Vec<Permission>) -> Self {
        let granted = permissions.iter().map(|p| p.value.clone()).collect();
        Self {
            user,
            permissions,
            granted,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    #[inline]
    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    #[inline]
    pub fn group_id(&self) -> Option<i64> {
        self.user.group_id
    }

    /// Permission rows of the caller's group, catalog order
    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn granted(&self) -> &PermissionSet {
        &self.granted
    }

    #[inline]
    pub fn can(&self, value: &str) -> bool {
        self.granted.has(value)
    }

    /// Fail with `MISSING_PERMISSIONS` unless the caller holds `value`
    pub fn require(&self, value: &str) -> ServiceResult<()> {
        self.granted.require(value).map_err(|e| {
            debug!(user_id = self.user.id, permission = value, "Permission denied");
            e.into()
        })
    }
}

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the session of an authenticated user id
    ///
    /// A token for a user that no longer exists is treated as invalid;
    /// a deactivated account is refused.
    #[instrument(skip(self))]
    pub async fn load_session(&self, user_id: i64) -> ServiceResult<Session> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id, "Token refers to a missing user");
                AppError::InvalidToken
            })?;

        if !user.is_active() {
            return Err(DomainError::InactiveUser.into());
        }

        let permissions = self.permissions_of(&user).await?;
        Ok(Session::new(user, permissions))
    }

    /// Permissions granted to the user's group; none without a group
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn permissions_of(&self, user: &User) -> ServiceResult<Vec<Permission>> {
        match user.group_id {
            Some(group_id) => Ok(self.ctx.permission_repo().find_by_group(group_id).await?),
            None => Ok(Vec::new()),
        }
    }

    /// The full catalog
    #[instrument(skip(self))]
    pub async fn catalog(&self) -> ServiceResult<Vec<Permission>> {
        Ok(self.ctx.permission_repo().list().await?)
    }
}
