//! User group service
//!
//! Groups carry the permissions of their members. Permission edits replace
//! the group's whole set in one transaction and answer with the stored set.

use std::collections::HashSet;

use cms_core::entities::UserGroup;
use cms_core::DomainError;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    ActionResponse, AddGroupRequest, CreatedResponse, GroupPermissionsRequest,
    GroupPermissionsResponse, GroupResponse, GroupsPageResponse, PermissionResponse,
    UpdateGroupRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::{PermissionService, Session};

/// Group service
pub struct GroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Groups with member counts and permissions, plus the whole catalog
    #[instrument(skip(self))]
    pub async fn page(&self) -> ServiceResult<GroupsPageResponse> {
        let groups = self.ctx.group_repo().list().await?;
        let catalog = PermissionService::new(self.ctx).catalog().await?;

        Ok(GroupsPageResponse {
            groups: groups.iter().map(GroupResponse::from).collect(),
            permissions: catalog.iter().map(PermissionResponse::from).collect(),
        })
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn add(&self, request: AddGroupRequest) -> ServiceResult<CreatedResponse> {
        request.validate()?;

        let group = UserGroup::new(
            request.name.trim().to_string(),
            request.description.trim().to_string(),
        );
        let id = self.ctx.group_repo().create(&group).await?;

        info!(group_id = id, "Group created");
        Ok(CreatedResponse::new(
            format!("{} kullanıcı grubu başarıyla oluşturuldu.", group.name),
            id,
        ))
    }

    #[instrument(skip(self, request), fields(group_id = ?request.id))]
    pub async fn update(&self, request: UpdateGroupRequest) -> ServiceResult<ActionResponse> {
        request.validate()?;
        let id = request
            .id
            .ok_or_else(|| ServiceError::validation("Group id is required"))?;

        let mut group = UserGroup::new(
            request.name.trim().to_string(),
            request.description.trim().to_string(),
        );
        group.id = id;

        if !self.ctx.group_repo().update(&group).await? {
            return Err(DomainError::GroupNotFound(id).into());
        }

        info!(group_id = id, "Group updated");
        Ok(ActionResponse::ok(format!(
            "{} kullanıcı grubu başarıyla düzenlendi.",
            group.name
        )))
    }

    /// Replace the group's permissions with exactly the submitted ids
    ///
    /// Every id must exist in the catalog; nothing is written otherwise.
    #[instrument(skip(self, session, request), fields(group_id = ?request.group_id))]
    pub async fn update_permissions(
        &self,
        session: &Session,
        request: GroupPermissionsRequest,
    ) -> ServiceResult<GroupPermissionsResponse> {
        request.validate()?;
        let group_id = request
            .group_id
            .ok_or_else(|| ServiceError::validation("groupId is required"))?;

        let ids = request
            .permissions
            .iter()
            .map(|p| {
                p.id
                    .ok_or_else(|| ServiceError::validation("Permission id is required"))
            })
            .collect::<ServiceResult<Vec<i64>>>()?;

        let catalog: HashSet<i64> = PermissionService::new(self.ctx)
            .catalog()
            .await?
            .iter()
            .map(|p| p.id)
            .collect();
        if let Some(unknown) = ids.iter().find(|id| !catalog.contains(id)) {
            return Err(DomainError::UnknownPermission(*unknown).into());
        }

        let stored = self
            .ctx
            .group_repo()
            .replace_permissions(group_id, &ids)
            .await?;
        let affects_current_user = session.group_id() == Some(group_id);

        info!(
            group_id,
            permissions = stored.len(),
            affects_current_user,
            "Group permissions replaced"
        );

        Ok(GroupPermissionsResponse {
            action: ActionResponse::ok("Grup izinleri başarıyla güncellendi."),
            group_id,
            permissions: stored.iter().map(PermissionResponse::from).collect(),
            affects_current_user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::TestContext;
    use serde_json::json;

    fn permissions_request(group_id: i64, ids: &[i64]) -> GroupPermissionsRequest {
        serde_json::from_value(json!({
            "groupId": group_id,
            "permissions": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>()
        }))
        .unwrap()
    }

    async fn session_in(t: &TestContext, group: Option<i64>) -> Session {
        let user_id = t.add_user("admin@kanal.example", "uzun-sifre", group, true);
        PermissionService::new(&t.ctx)
            .load_session(user_id)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_replace_is_idempotent() {
        let t = TestContext::new();
        let group = t.add_group("Editör", &[1]);
        let session = session_in(&t, None).await;
        let service = GroupService::new(&t.ctx);

        let first = service
            .update_permissions(&session, permissions_request(group, &[4, 2, 4]))
            .await
            .unwrap();
        let second = service
            .update_permissions(&session, permissions_request(group, &[4, 2, 4]))
            .await
            .unwrap();

        let ids = |r: &GroupPermissionsResponse| r.permissions.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(&first), vec![2, 4]);
        assert_eq!(ids(&first), ids(&second));
        assert!(!first.affects_current_user);
    }

    #[tokio::test]
    async fn test_own_group_is_flagged() {
        let t = TestContext::new();
        let group = t.add_group("Yönetici", &[1]);
        let session = session_in(&t, Some(group)).await;

        let response = GroupService::new(&t.ctx)
            .update_permissions(&session, permissions_request(group, &[1, 19]))
            .await
            .unwrap();
        assert!(response.affects_current_user);
        assert_eq!(response.group_id, group);
    }

    #[tokio::test]
    async fn test_unknown_permission_writes_nothing() {
        let t = TestContext::new();
        let group = t.add_group("Editör", &[1]);
        let session = session_in(&t, None).await;

        let err = GroupService::new(&t.ctx)
            .update_permissions(&session, permissions_request(group, &[2, 9999]))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_PERMISSION");
        assert_eq!(err.status_code(), 400);

        let page = GroupService::new(&t.ctx).page().await.unwrap();
        let stored = page.groups.iter().find(|g| g.id == group).unwrap();
        assert_eq!(stored.permissions.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_group_is_not_found() {
        let t = TestContext::new();
        let session = session_in(&t, None).await;

        let err = GroupService::new(&t.ctx)
            .update_permissions(&session, permissions_request(424_242, &[1]))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_add_and_update_group() {
        let t = TestContext::new();
        let service = GroupService::new(&t.ctx);

        let created = service
            .add(AddGroupRequest {
                name: "Muhabir".to_string(),
                description: "Saha ekibi".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(
            created.action.message.description,
            "Muhabir kullanıcı grubu başarıyla oluşturuldu."
        );

        let updated = service
            .update(UpdateGroupRequest {
                id: Some(created.id),
                name: "Muhabirler".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        assert!(updated.message.description.starts_with("Muhabirler"));

        let page = service.page().await.unwrap();
        assert_eq!(page.groups[0].name, "Muhabirler");
        assert_eq!(page.permissions.len(), cms_core::permission_values::ALL.len());
    }
}
