//! Media partner (Basın) service

use cms_core::entities::MediaPartner;
use cms_core::DomainError;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    ActionResponse, CreatedResponse, MediaPartnerPayload, MediaPartnerResponse,
    MediaPartnersResponse, MediaPartnersUpdateRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Media partner service
pub struct MediaPartnerService<'a> {
    ctx: &'a ServiceContext,
}

fn to_entity(payload: MediaPartnerPayload) -> MediaPartner {
    MediaPartner {
        id: payload.id.unwrap_or_default(),
        name: payload.name.trim().to_string(),
        url: payload.url,
        image: payload.image,
    }
}

impl<'a> MediaPartnerService<'a> {
    /// Create a new MediaPartnerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<MediaPartnersResponse> {
        let partners = self.ctx.media_partner_repo().list().await?;
        Ok(MediaPartnersResponse {
            media_partners: partners.iter().map(MediaPartnerResponse::from).collect(),
        })
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn add(&self, payload: MediaPartnerPayload) -> ServiceResult<CreatedResponse> {
        payload.validate()?;

        let partner = to_entity(payload);
        let id = self.ctx.media_partner_repo().create(&partner).await?;

        info!(partner_id = id, "Media partner created");
        Ok(CreatedResponse::new("Başarıyla eklendi", id))
    }

    /// Rewrite every submitted partner; all or nothing
    #[instrument(skip_all, fields(count = request.media_partners.len()))]
    pub async fn update(&self, request: MediaPartnersUpdateRequest) -> ServiceResult<ActionResponse> {
        request.validate()?;

        let partners: Vec<MediaPartner> = request
            .media_partners
            .into_iter()
            .map(to_entity)
            .collect();
        if let Some(partner) = partners.iter().find(|p| p.id <= 0) {
            return Err(ServiceError::validation(format!(
                "Media partner \"{}\" has no id",
                partner.name
            )));
        }

        let written = self.ctx.media_partner_repo().update_all(&partners).await?;
        info!(written, "Media partners updated");

        Ok(ActionResponse::ok("Başarıyla güncellendi"))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<ActionResponse> {
        if !self.ctx.media_partner_repo().delete(id).await? {
            return Err(DomainError::MediaPartnerNotFound(id).into());
        }
        Ok(ActionResponse::ok("Başarıyla silindi"))
    }
}
