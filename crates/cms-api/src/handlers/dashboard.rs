//! Dashboard handler

use axum::{extract::State, Json};
use cms_core::permission_values as pv;
use cms_service::dto::DashboardResponse;
use cms_service::DashboardService;

use crate::extractors::AuthSession;
use crate::response::ApiResult;
use crate::state::AppState;

/// Content counts for the panel landing page
///
/// GET /api/panel/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<DashboardResponse>> {
    session.require(pv::VIEW_DASHBOARD)?;

    let service = DashboardService::new(state.service_context());
    Ok(Json(service.counts().await?))
}
