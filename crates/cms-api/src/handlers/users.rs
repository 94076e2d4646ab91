//! Panel user handlers
//!
//! Endpoints for managing panel accounts.

use axum::{extract::State, Json};
use cms_core::permission_values as pv;
use cms_service::dto::{
    ActionResponse, AddUserRequest, CreatedResponse, UpdateUserRequest, UsersPageResponse,
};
use cms_service::UserService;

use crate::extractors::{AuthSession, IdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Users with the groups they can be assigned to
///
/// GET /api/panel/users/list
pub async fn list_users(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<UsersPageResponse>> {
    session.require(pv::VIEW_USER)?;

    let service = UserService::new(state.service_context());
    Ok(Json(service.page().await?))
}

/// POST /api/panel/users/list/add
pub async fn add_user(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<AddUserRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    session.require(pv::CREATE_USER)?;

    let service = UserService::new(state.service_context());
    Ok(Created(Json(service.add(request).await?)))
}

/// PUT /api/panel/users/list/update
pub async fn update_user(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_USER)?;

    let service = UserService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// DELETE /api/panel/users/list/delete/:id
pub async fn delete_user(
    State(state): State<AppState>,
    session: AuthSession,
    IdPath(id): IdPath,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::DELETE_USER)?;

    let service = UserService::new(state.service_context());
    Ok(Json(service.delete(session.user_id(), id).await?))
}
