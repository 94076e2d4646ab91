//! Authentication service
//!
//! Handles login, password changes and the first administrator account.

use cms_common::{AdminBootstrap, AppError};
use cms_core::entities::{User, UserGroup, UserStatus};
use cms_core::DomainError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    ActionResponse, ChangePasswordRequest, LoginRequest, LoginResponse, MeResponse,
    PermissionResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::{PermissionService, Session};

/// Name of the group created for the bootstrap administrator
const ADMIN_GROUP_NAME: &str = "Yönetici";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    ///
    /// Unknown email is a 404 and a wrong password a 401, as the panel
    /// shows a different message for each.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        request.validate()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email.trim().to_lowercase())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                DomainError::EmailNotFound(request.email.clone())
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                AppError::InvalidCredentials
            })?;

        if !self.ctx.password_service().verify(&request.password, &password_hash) {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        if !user.is_active() {
            warn!(user_id = user.id, "Login refused: inactive account");
            return Err(DomainError::InactiveUser.into());
        }

        if self.ctx.password_service().needs_rehash(&password_hash) {
            self.upgrade_hash(user.id, &request.password).await;
        }

        let permissions = PermissionService::new(self.ctx).permissions_of(&user).await?;
        let token = self.ctx.jwt_service().issue(user.id, user.group_id)?;

        info!(user_id = user.id, "User logged in successfully");

        Ok(LoginResponse {
            user: UserResponse::from(&user),
            token,
            permissions: permissions.iter().map(PermissionResponse::from).collect(),
        })
    }

    /// Replace a legacy hash after a successful login; failures only log
    async fn upgrade_hash(&self, user_id: i64, password: &str) {
        let result = match self.ctx.password_service().hash(password) {
            Ok(hash) => self
                .ctx
                .user_repo()
                .update_password(user_id, &hash)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match result {
            Ok(()) => info!(user_id, "Legacy password hash upgraded"),
            Err(error) => warn!(user_id, %error, "Legacy password hash upgrade failed"),
        }
    }

    /// Current user and permissions, as loaded for this request
    pub fn me(session: &Session) -> MeResponse {
        MeResponse {
            user: UserResponse::from(session.user()),
            permissions: session
                .permissions()
                .iter()
                .map(PermissionResponse::from)
                .collect(),
        }
    }

    /// Change the caller's own password
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: i64,
        request: ChangePasswordRequest,
    ) -> ServiceResult<ActionResponse> {
        request.validate()?;

        let current = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        if !self.ctx.password_service().verify(&request.old_password, &current) {
            return Err(DomainError::WrongOldPassword.into());
        }

        let new_hash = self.ctx.password_service().hash(&request.new_password)?;
        self.ctx.user_repo().update_password(user_id, &new_hash).await?;

        info!(user_id, "Password changed");
        Ok(ActionResponse::ok("Şifre başarıyla güncellendi."))
    }

    /// Create the first administrator when the user table is empty
    ///
    /// The account gets a group holding the whole permission catalog.
    /// Returns the new user id, or `None` when users already exist.
    #[instrument(skip(self, admin), fields(email = %admin.email))]
    pub async fn bootstrap_admin(&self, admin: &AdminBootstrap) -> ServiceResult<Option<i64>> {
        if !self.ctx.user_repo().list().await?.is_empty() {
            return Ok(None);
        }

        let groups = self.ctx.group_repo().list().await?;
        let group_id = match groups.iter().find(|g| g.name == ADMIN_GROUP_NAME) {
            Some(group) => group.id,
            None => {
                let group = UserGroup::new(
                    ADMIN_GROUP_NAME.to_string(),
                    "Tüm yetkilere sahip yöneticiler".to_string(),
                );
                self.ctx.group_repo().create(&group).await?
            }
        };

        let catalog: Vec<i64> = PermissionService::new(self.ctx)
            .catalog()
            .await?
            .iter()
            .map(|p| p.id)
            .collect();
        self.ctx
            .group_repo()
            .replace_permissions(group_id, &catalog)
            .await?;

        let user = User::new(
            admin.name.clone(),
            admin.email.trim().to_lowercase(),
            Some(group_id),
            UserStatus::Active,
        );
        let hash = self.ctx.password_service().hash(&admin.password)?;
        let user_id = self.ctx.user_repo().create(&user, &hash).await?;

        info!(user_id, group_id, "Administrator account created");
        Ok(Some(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{TestContext, TEST_SECRET};
    use cms_common::JwtService;

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_returns_decodable_token() {
        let t = TestContext::new();
        let group = t.add_group("Editör", &[1, 3]);
        let user_id = t.add_user("editor@kanal.example", "yayin-2024", Some(group), true);

        let response = AuthService::new(&t.ctx)
            .login(login("editor@kanal.example", "yayin-2024"))
            .await
            .unwrap();

        assert_eq!(response.user.id, user_id);
        assert_eq!(response.permissions.len(), 2);

        let claims = JwtService::new(TEST_SECRET, 3600)
            .decode_token(&response.token)
            .unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.group_id, Some(group));
    }

    #[tokio::test]
    async fn test_login_with_legacy_bcrypt_hash_upgrades_it() {
        let t = TestContext::new();
        let user_id = t.add_user("eski@kanal.example", "unused", None, true);
        // OpenBSD reference vector for the password "U*U"
        t.set_password_hash(
            user_id,
            "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW",
        );
        let service = AuthService::new(&t.ctx);

        let err = service
            .login(login("eski@kanal.example", "U*V"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
        assert!(t.password_hash(user_id).unwrap().starts_with("$2a$"));

        let response = service
            .login(login("eski@kanal.example", "U*U"))
            .await
            .unwrap();
        assert_eq!(response.user.id, user_id);

        let upgraded = t.password_hash(user_id).unwrap();
        assert!(upgraded.starts_with("$argon2id$"));

        service
            .login(login("eski@kanal.example", "U*U"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_login_failures() {
        let t = TestContext::new();
        t.add_user("editor@kanal.example", "yayin-2024", None, true);
        t.add_user("pasif@kanal.example", "yayin-2024", None, false);
        let service = AuthService::new(&t.ctx);

        let err = service
            .login(login("yok@kanal.example", "yayin-2024"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);

        let err = service
            .login(login("editor@kanal.example", "yanlis"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);

        let err = service
            .login(login("pasif@kanal.example", "yayin-2024"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INACTIVE_USER");
    }

    #[tokio::test]
    async fn test_change_password() {
        let t = TestContext::new();
        let user_id = t.add_user("editor@kanal.example", "eski-sifre", None, true);
        let service = AuthService::new(&t.ctx);

        let err = service
            .change_password(
                user_id,
                ChangePasswordRequest {
                    old_password: "yanlis".to_string(),
                    new_password: "yeni-sifre".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "WRONG_OLD_PASSWORD");
        assert_eq!(err.status_code(), 400);

        service
            .change_password(
                user_id,
                ChangePasswordRequest {
                    old_password: "eski-sifre".to_string(),
                    new_password: "yeni-sifre".to_string(),
                },
            )
            .await
            .unwrap();

        let hash = t.password_hash(user_id).unwrap();
        assert!(t.ctx.password_service().verify("yeni-sifre", &hash));
    }

    #[tokio::test]
    async fn test_bootstrap_admin_runs_once() {
        let t = TestContext::new();
        let admin = AdminBootstrap {
            name: "Yönetici".to_string(),
            email: "admin@kanal.example".to_string(),
            password: "ilk-sifre".to_string(),
        };
        let service = AuthService::new(&t.ctx);

        let user_id = service.bootstrap_admin(&admin).await.unwrap().unwrap();
        let session = PermissionService::new(&t.ctx)
            .load_session(user_id)
            .await
            .unwrap();
        assert_eq!(
            session.granted().len(),
            cms_core::permission_values::ALL.len()
        );

        assert_eq!(service.bootstrap_admin(&admin).await.unwrap(), None);
    }
}
