//! Homepage handlers
//!
//! Trailers (`fragmanlar`) and episodes (`bolumler`) shown on the homepage.

use axum::{extract::State, Json};
use cms_core::permission_values as pv;
use cms_service::dto::{ActionResponse, HomeResponse, HomeUpdateRequest};
use cms_service::HomeService;

use crate::extractors::{AuthSession, IdPath, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// Active trailers and episodes
///
/// GET /api/panel/pages/home
pub async fn get_home(State(state): State<AppState>) -> ApiResult<Json<HomeResponse>> {
    let service = HomeService::new(state.service_context());
    Ok(Json(service.get().await?))
}

/// Upsert trailers and episodes in one go
///
/// PUT /api/panel/pages/home/update
pub async fn update_home(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<HomeUpdateRequest>,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_HOME)?;

    let service = HomeService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// DELETE /api/panel/pages/home/trailer/delete/:id
pub async fn delete_trailer(
    State(state): State<AppState>,
    session: AuthSession,
    IdPath(id): IdPath,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_HOME)?;

    let service = HomeService::new(state.service_context());
    Ok(Json(service.delete_trailer(id).await?))
}

/// DELETE /api/panel/pages/home/episode/delete/:id
pub async fn delete_episode(
    State(state): State<AppState>,
    session: AuthSession,
    IdPath(id): IdPath,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_HOME)?;

    let service = HomeService::new(state.service_context());
    Ok(Json(service.delete_episode(id).await?))
}
