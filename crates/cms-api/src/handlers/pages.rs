//! Singleton page handlers
//!
//! Live stream, masthead (künye), contact page and site settings.

use axum::{extract::State, Json};
use cms_core::permission_values as pv;
use cms_service::dto::{
    ActionResponse, ContactPageResponse, ContactUpdateRequest, LiveStreamRequest,
    LiveStreamResponse, MastheadRequest, MastheadResponse, SiteSettingsRequest,
    SocialMediaRequest,
};
use cms_service::PageService;

use crate::extractors::{AuthSession, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/panel/pages/canli-yayin
pub async fn get_live_stream(State(state): State<AppState>) -> ApiResult<Json<LiveStreamResponse>> {
    let service = PageService::new(state.service_context());
    Ok(Json(service.live_stream().await?))
}

/// PUT /api/panel/pages/canli-yayin/update
pub async fn update_live_stream(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<LiveStreamRequest>,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_LIVESTREAM)?;

    let service = PageService::new(state.service_context());
    Ok(Json(service.update_live_stream(request).await?))
}

/// GET /api/panel/pages/kunye
pub async fn get_masthead(State(state): State<AppState>) -> ApiResult<Json<MastheadResponse>> {
    let service = PageService::new(state.service_context());
    Ok(Json(service.masthead().await?))
}

/// PUT /api/panel/pages/kunye/update
pub async fn update_masthead(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<MastheadRequest>,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_MASTHEAD)?;

    let service = PageService::new(state.service_context());
    Ok(Json(service.save_masthead(request).await?))
}

/// Contact details together with the social links
///
/// GET /api/panel/pages/contact
/// GET /api/panel/settings/site
pub async fn get_contact_page(
    State(state): State<AppState>,
) -> ApiResult<Json<ContactPageResponse>> {
    let service = PageService::new(state.service_context());
    Ok(Json(service.contact_page().await?))
}

/// PUT /api/panel/pages/contact/update
pub async fn update_contact(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<ContactUpdateRequest>,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_CONTACT)?;

    let service = PageService::new(state.service_context());
    Ok(Json(service.update_contact(request).await?))
}

/// Site name and description
///
/// PUT /api/panel/settings/site/update
pub async fn update_site_settings(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<SiteSettingsRequest>,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_SITE_SETTINGS)?;

    let service = PageService::new(state.service_context());
    Ok(Json(service.update_site_settings(request).await?))
}

/// PUT /api/panel/socialmedia/update
pub async fn update_social_media(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(request): JsonBody<SocialMediaRequest>,
) -> ApiResult<Json<ActionResponse>> {
    session.require(pv::EDIT_SOCIAL_MEDIA)?;

    let service = PageService::new(state.service_context());
    Ok(Json(service.update_social_media(request).await?))
}
