//! Authentication handlers
//!
//! Login, the current session and password changes.

use axum::{extract::State, Json};
use cms_service::dto::{ActionResponse, ChangePasswordRequest, LoginRequest, LoginResponse, MeResponse};
use cms_service::AuthService;

use crate::extractors::{AuthSession, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// Login with email and password
///
/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Current user with freshly loaded permissions
///
/// GET /api/users/me
pub async fn me(session: AuthSession) -> Json<MeResponse> {
    Json(AuthService::me(&session))
}

/// Change the caller's own password
///
/// PUT /api/panel/settings/user/password/update
pub async fn change_password(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<ChangePasswordRequest>,
) -> ApiResult<Json<ActionResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.change_password(session.user_id(), request).await?;
    Ok(Json(response))
}
