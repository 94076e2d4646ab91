//! Media partner (basın) handlers

use axum::{extract::State, Json};
use cms_core::permission_values as pv;
use cms_service::dto::{
    ActionResponse, CreatedResponse, MediaPartnerPayload, MediaPartnersResponse,
    MediaPartnersUpdateRequest,
};
use cms_service::MediaPartnerService;

use crate::extractors::{AuthSession, IdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/panel/pages/basin
pub async fn list_media_partners(
    State(state): State<AppState>,
) -> ApiResult<Json<MediaPartnersResponse>> {
    let service = MediaPartnerService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// Save every submitted partner
///
/// PUT /api/panel/pages/basin/update
pub async fn update_media_partners(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<MediaPartnersUpdateRequest>,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_PRESS)?;

    let service = MediaPartnerService::new(state.service_context());
    Ok(Json(service.update(request).await?))
}

/// POST /api/panel/pages/basin/add
pub async fn add_media_partner(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(payload): JsonBody<MediaPartnerPayload>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    session.require(pv::EDIT_PRESS)?;

    let service = MediaPartnerService::new(state.service_context());
    Ok(Created(Json(service.add(payload).await?)))
}

/// DELETE /api/panel/pages/basin/delete/:id
pub async fn delete_media_partner(
    State(state): State<AppState>,
    session: AuthSession,
    IdPath(id): IdPath,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_PRESS)?;

    let service = MediaPartnerService::new(state.service_context());
    Ok(Json(service.delete(id).await?))
}
