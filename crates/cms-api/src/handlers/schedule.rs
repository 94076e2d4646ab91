//! Weekly schedule (yayın akışı) handlers

use axum::{extract::State, Json};
use cms_core::permission_values as pv;
use cms_service::dto::{ActionResponse, ScheduleResponse, ScheduleUpdateRequest, ScheduleUpdateResponse};
use cms_service::ScheduleService;

use crate::extractors::{AuthSession, IdPath, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// The week grouped by day
///
/// GET /api/panel/pages/yayin-akisi
pub async fn get_schedule(State(state): State<AppState>) -> ApiResult<Json<ScheduleResponse>> {
    let service = ScheduleService::new(state.service_context());
    Ok(Json(service.get().await?))
}

/// Reconcile the submitted days against the stored rows
///
/// PUT /api/panel/pages/yayin-akisi/update
pub async fn update_schedule(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<ScheduleUpdateRequest>,
) -> ApiResult<Json<ScheduleUpdateResponse>> {
    session.require(pv::EDIT_SCHEDULE)?;

    let service = ScheduleService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// DELETE /api/panel/pages/yayin-akisi/delete/:id
pub async fn delete_schedule_item(
    State(state): State<AppState>,
    session: AuthSession,
    IdPath(id): IdPath,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_SCHEDULE)?;

    let service = ScheduleService::new(state.service_context());
    Ok(Json(service.delete(id).await?))
}
