//! User group handlers

use axum::{extract::State, Json};
use cms_core::permission_values as pv;
use cms_service::dto::{
    ActionResponse, AddGroupRequest, CreatedResponse, GroupPermissionsRequest,
    GroupPermissionsResponse, GroupsPageResponse, UpdateGroupRequest,
};
use cms_service::GroupService;

use crate::extractors::{AuthSession, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Groups with member counts and grants, plus the permission catalog
///
/// GET /api/panel/users/groups
pub async fn list_groups(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<GroupsPageResponse>> {
    session.require(pv::VIEW_GROUP)?;

    let service = GroupService::new(state.service_context());
    Ok(Json(service.page().await?))
}

/// POST /api/panel/users/groups/add
pub async fn add_group(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<AddGroupRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    session.require(pv::CREATE_GROUP)?;

    let service = GroupService::new(state.service_context());
    Ok(Created(Json(service.add(request).await?)))
}

/// PUT /api/panel/users/groups/update
pub async fn update_group(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<UpdateGroupRequest>,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_GROUP)?;

    let service = GroupService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// Replace the full permission set of a group
///
/// PUT /api/panel/users/groups/permissions/update
pub async fn update_group_permissions(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<GroupPermissionsRequest>,
) -> ApiResult<Json<GroupPermissionsResponse>> {
    session.require(pv::MANAGE_GROUP_PERMISSIONS)?;

    let service = GroupService::new(state.service_context());
    Ok(Json(service.update_permissions(&session, request).await?))
}
