//! User service
//!
//! Panel account management: listing, add, edit and delete.

use cms_core::entities::{User, UserStatus};
use cms_core::DomainError;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    ActionResponse, AddUserRequest, CreatedResponse, GroupSummary, UpdateUserRequest,
    UserResponse, UsersPageResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

fn status_of(value: i64) -> UserStatus {
    UserStatus::from_i32(i32::from(value == 1))
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Users with their group names, and the groups for the edit form
    #[instrument(skip(self))]
    pub async fn page(&self) -> ServiceResult<UsersPageResponse> {
        let users = self.ctx.user_repo().list().await?;
        let groups = self.ctx.group_repo().list().await?;

        Ok(UsersPageResponse {
            users: users.iter().map(UserResponse::from).collect(),
            groups: groups.iter().map(GroupSummary::from).collect(),
        })
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn add(&self, request: AddUserRequest) -> ServiceResult<CreatedResponse> {
        request
            .validate()
            .map_err(|_| ServiceError::validation("Tüm alanlar doldurulmalıdır."))?;

        let email = request.email.trim().to_lowercase();
        if self.ctx.user_repo().email_exists(&email, None).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let user = User::new(
            request.name.trim().to_string(),
            email,
            request.group_id,
            status_of(request.status.unwrap_or_default()),
        );
        let hash = self.ctx.password_service().hash(&request.password)?;
        let id = self.ctx.user_repo().create(&user, &hash).await?;

        info!(user_id = id, "User created");
        Ok(CreatedResponse::new("Kullanıcı başarıyla oluşturuldu.", id))
    }

    /// Edit name, email, group and status; omitted group/status stay as stored
    #[instrument(skip(self, request), fields(user_id = ?request.id))]
    pub async fn update(&self, request: UpdateUserRequest) -> ServiceResult<ActionResponse> {
        request.validate()?;
        let id = request
            .id
            .ok_or_else(|| ServiceError::validation("User id is required"))?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?;

        let email = request.email.trim().to_lowercase();
        if self.ctx.user_repo().email_exists(&email, Some(id)).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        user.name = request.name.trim().to_string();
        user.email = email;
        if let Some(group_id) = request.group_id {
            user.group_id = Some(group_id);
        }
        if let Some(status) = request.status {
            user.status = status_of(status);
        }

        if !self.ctx.user_repo().update(&user).await? {
            return Err(DomainError::UserNotFound(id).into());
        }

        info!(user_id = id, "User updated");
        Ok(ActionResponse::ok("Kullanıcı bilgileri başarıyla düzenlendi."))
    }

    /// Delete a user other than the caller
    #[instrument(skip(self))]
    pub async fn delete(&self, caller_id: i64, id: i64) -> ServiceResult<ActionResponse> {
        if caller_id == id {
            return Err(DomainError::CannotDeleteSelf.into());
        }
        if !self.ctx.user_repo().delete(id).await? {
            return Err(DomainError::UserNotFound(id).into());
        }

        info!(user_id = id, deleted_by = caller_id, "User deleted");
        Ok(ActionResponse::ok("Kullanıcı başarıyla silindi."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::TestContext;
    use serde_json::json;

    fn add_request(value: serde_json::Value) -> AddUserRequest {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_add_user_and_list() {
        let t = TestContext::new();
        let group = t.add_group("Editör", &[]);
        let service = UserService::new(&t.ctx);

        let created = service
            .add(add_request(json!({
                "name": "Ayşe",
                "email": "Ayse@Kanal.example",
                "password": "uzun-sifre",
                "groupId": group,
                "status": "1"
            })))
            .await
            .unwrap();

        let page = service.page().await.unwrap();
        let user = page.users.iter().find(|u| u.id == created.id).unwrap();
        assert_eq!(user.email, "ayse@kanal.example");
        assert_eq!(user.group_name.as_deref(), Some("Editör"));
        assert_eq!(user.status, 1);
        assert_eq!(page.groups.len(), 1);
    }

    #[tokio::test]
    async fn test_add_user_requires_every_field() {
        let t = TestContext::new();
        let err = UserService::new(&t.ctx)
            .add(add_request(json!({
                "name": "Ayşe",
                "email": "ayse@kanal.example",
                "password": "uzun-sifre"
            })))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("Tüm alanlar doldurulmalıdır."));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let t = TestContext::new();
        let group = t.add_group("Editör", &[]);
        t.add_user("ayse@kanal.example", "uzun-sifre", Some(group), true);

        let err = UserService::new(&t.ctx)
            .add(add_request(json!({
                "name": "Başka Ayşe",
                "email": "ayse@kanal.example",
                "password": "uzun-sifre",
                "groupId": group,
                "status": 1
            })))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_update_keeps_unsent_group() {
        let t = TestContext::new();
        let group = t.add_group("Editör", &[]);
        let id = t.add_user("ayse@kanal.example", "uzun-sifre", Some(group), true);
        let service = UserService::new(&t.ctx);

        let request: UpdateUserRequest = serde_json::from_value(json!({
            "id": id,
            "name": "Ayşe Yılmaz",
            "email": "ayse@kanal.example",
            "status": 0
        }))
        .unwrap();
        service.update(request).await.unwrap();

        let page = service.page().await.unwrap();
        let user = page.users.iter().find(|u| u.id == id).unwrap();
        assert_eq!(user.name, "Ayşe Yılmaz");
        assert_eq!(user.group_id, Some(group));
        assert_eq!(user.status, 0);
    }

    #[tokio::test]
    async fn test_delete_rules() {
        let t = TestContext::new();
        let me = t.add_user("admin@kanal.example", "uzun-sifre", None, true);
        let other = t.add_user("editor@kanal.example", "uzun-sifre", None, true);
        let service = UserService::new(&t.ctx);

        let err = service.delete(me, me).await.unwrap_err();
        assert_eq!(err.error_code(), "CANNOT_DELETE_SELF");

        service.delete(me, other).await.unwrap();
        assert_eq!(service.delete(me, other).await.unwrap_err().status_code(), 404);
    }
}
