//! File upload handler

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use cms_core::permission_values as pv;
use cms_service::dto::UploadResponse;
use cms_service::{ServiceError, UploadService};
use serde::Deserialize;

use crate::extractors::AuthSession;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Query string of an upload request
#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    pub destination: Option<String>,
}

/// Store the multipart `file` field under the public root
///
/// The target directory comes from `?destination=`, else from a
/// `destination` form field, else from configuration.
///
/// POST /api/upload
pub async fn upload_file(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    session.require(pv::UPLOAD_FILES)?;

    let mut file: Option<(String, Vec<u8>)> = None;
    let mut form_destination: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(e.body_text()))?
    {
        match field.name() {
            Some("file") => {
                let original_name = field.file_name().unwrap_or("file").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                file = Some((original_name, bytes.to_vec()));
            }
            Some("destination") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                form_destination = Some(text);
            }
            _ => {}
        }
    }

    let (original_name, bytes) =
        file.ok_or_else(|| ServiceError::validation("Dosya bulunamadı"))?;
    let destination = query.destination.or(form_destination);

    let service = UploadService::new(state.service_context());
    let response = service
        .save(destination.as_deref(), &original_name, &bytes)
        .await?;
    Ok(Json(response))
}
