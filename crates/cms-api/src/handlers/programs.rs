//! Program handlers

use axum::{extract::State, Json};
use cms_core::permission_values as pv;
use cms_service::dto::{
    ActionResponse, CreatedResponse, ProgramBatchResponse, ProgramEnvelope, ProgramsRequest,
    ProgramsResponse,
};
use cms_service::ProgramService;

use crate::extractors::{AuthSession, IdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List all programs
///
/// GET /api/panel/pages/programs
pub async fn list_programs(State(state): State<AppState>) -> ApiResult<Json<ProgramsResponse>> {
    let service = ProgramService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// Get a program by id
///
/// GET /api/panel/pages/programs/:id
pub async fn get_program(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ProgramEnvelope>> {
    let service = ProgramService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// Update one program or a batch
///
/// PUT /api/panel/pages/programs/update
pub async fn update_programs(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<ProgramsRequest>,
) -> ApiResult<Json<ProgramBatchResponse>> {
    session.require(pv::EDIT_PROGRAMS)?;

    let service = ProgramService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// POST /api/panel/pages/programs/add
pub async fn add_program(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<ProgramsRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    session.require(pv::EDIT_PROGRAMS)?;

    let service = ProgramService::new(state.service_context());
    Ok(Created(Json(service.add(request).await?)))
}

/// DELETE /api/panel/pages/programs/delete/:id
pub async fn delete_program(
    State(state): State<AppState>,
    session: AuthSession,
    IdPath(id): IdPath,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_PROGRAMS)?;

    let service = ProgramService::new(state.service_context());
    Ok(Json(service.delete(id).await?))
}
