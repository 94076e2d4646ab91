//! Page singleton service: live stream, masthead, contact, site settings and
//! social media links

use cms_core::entities::{ContactPage, LiveStream, Masthead, SiteSettings, SocialMedia};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    ActionResponse, ContactPageResponse, ContactResponse, ContactUpdateRequest,
    LiveStreamRequest, LiveStreamResponse, MastheadRequest, MastheadResponse, SiteSettingsRequest,
    SocialMediaRequest, SocialMediaResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Page service
pub struct PageService<'a> {
    ctx: &'a ServiceContext,
}

/// Trim list entries and drop the blank ones the form leaves behind
fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

impl From<MastheadRequest> for Masthead {
    fn from(r: MastheadRequest) -> Self {
        Self {
            title: r.unvan,
            logo: r.logo,
            broadcast_medium: r.yayin_ortami,
            license_type: r.lisans_tipi,
            broadcast_type: r.yayin_turu,
            address: r.adres,
            phone_fax: r.telefon_faks,
            website: r.internet_adresi,
            email: r.email,
            kep_address: r.kep_adresi,
            tax_office_no: r.vergi_daire_no,
            mersis_no: r.mersis_no,
            responsible_managers: r.sorumlular,
            viewer_representative_name: r.izleyici_temsilcisi_ad,
            viewer_representative_email: r.izleyici_temsilcisi_email,
            documents: r.dokumanlar,
        }
    }
}

impl<'a> PageService<'a> {
    /// Create a new PageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Live stream ===

    #[instrument(skip(self))]
    pub async fn live_stream(&self) -> ServiceResult<LiveStreamResponse> {
        let stream = self.ctx.page_repo().live_stream().await?;
        Ok(LiveStreamResponse::from(&stream))
    }

    #[instrument(skip(self, request), fields(is_live = ?request.is_live))]
    pub async fn update_live_stream(&self, request: LiveStreamRequest) -> ServiceResult<ActionResponse> {
        let stream = LiveStream {
            stream_url: request.stream_url.trim().to_string(),
            stream_title: request.stream_title,
            thumbnail_url: request.thumbnail_url.trim().to_string(),
            is_live: request.is_live.unwrap_or(false),
        };
        self.ctx.page_repo().update_live_stream(&stream).await?;

        info!(is_live = stream.is_live, "Live stream settings saved");
        Ok(ActionResponse::ok("Başarıyla güncellendi"))
    }

    // === Masthead ===

    #[instrument(skip(self))]
    pub async fn masthead(&self) -> ServiceResult<MastheadResponse> {
        let masthead = self.ctx.page_repo().masthead().await?;
        Ok(MastheadResponse::from(&masthead))
    }

    #[instrument(skip_all)]
    pub async fn save_masthead(&self, request: MastheadRequest) -> ServiceResult<ActionResponse> {
        let masthead = Masthead::from(request);
        self.ctx.page_repo().save_masthead(&masthead).await?;

        info!(
            managers = masthead.responsible_managers.len(),
            documents = masthead.documents.len(),
            "Masthead saved"
        );
        Ok(ActionResponse::ok("Künye başarıyla güncellendi"))
    }

    // === Contact, site settings and social media ===

    /// Contact row (with site name/description) plus social links
    #[instrument(skip(self))]
    pub async fn contact_page(&self) -> ServiceResult<ContactPageResponse> {
        let contact = self.ctx.page_repo().contact().await?;
        let settings = self.ctx.page_repo().site_settings().await?;
        let social = self.ctx.page_repo().social_media().await?;

        Ok(ContactPageResponse {
            contact: ContactResponse::from((&contact, &settings)),
            socialmedia: SocialMediaResponse::from(&social),
        })
    }

    #[instrument(skip_all)]
    pub async fn update_contact(&self, request: ContactUpdateRequest) -> ServiceResult<ActionResponse> {
        let contact = ContactPage {
            address: request.address,
            phones: clean_list(request.phone),
            faxes: clean_list(request.fax),
            emails: clean_list(request.email),
            maps: request.maps.trim().to_string(),
        };
        self.ctx.page_repo().update_contact(&contact).await?;

        info!("Contact page saved");
        Ok(ActionResponse::ok("İletişim sayfası verileri başarıyla güncellendi"))
    }

    #[instrument(skip_all, fields(name = %request.name))]
    pub async fn update_site_settings(
        &self,
        request: SiteSettingsRequest,
    ) -> ServiceResult<ActionResponse> {
        request.validate()?;

        let settings = SiteSettings {
            name: request.name.trim().to_string(),
            description: request.description,
        };
        self.ctx.page_repo().update_site_settings(&settings).await?;

        Ok(ActionResponse::ok("Site ayarları başarıyla düzenlendi."))
    }

    #[instrument(skip_all)]
    pub async fn update_social_media(
        &self,
        request: SocialMediaRequest,
    ) -> ServiceResult<ActionResponse> {
        let social = SocialMedia {
            facebook: request.facebook.trim().to_string(),
            instagram: request.instagram.trim().to_string(),
            twitter: request.twitter.trim().to_string(),
            linkedin: request.linkedin.trim().to_string(),
            youtube: request.youtube.trim().to_string(),
        };
        self.ctx.page_repo().update_social_media(&social).await?;

        Ok(ActionResponse::ok("Sosyal medya bilgileri başarıyla düzenlendi."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_list_drops_blank_rows() {
        let cleaned = clean_list(vec![
            " 0212 000 00 00 ".to_string(),
            String::new(),
            "   ".to_string(),
            "0212 111 11 11".to_string(),
        ]);
        assert_eq!(cleaned, vec!["0212 000 00 00", "0212 111 11 11"]);
    }

    #[test]
    fn test_masthead_request_maps_turkish_keys() {
        let request: MastheadRequest = serde_json::from_value(json!({
            "unvan": "Bölge Televizyonu A.Ş.",
            "mersis_no": "0123456789",
            "sorumlular": [{"name": "Ali Veli", "title": "Genel Yayın Yönetmeni"}],
            "dokumanlar": [{"name": "Yayın İlkeleri", "url": "/uploads/ilkeler.pdf"}]
        }))
        .unwrap();

        let masthead = Masthead::from(request);
        assert_eq!(masthead.title, "Bölge Televizyonu A.Ş.");
        assert_eq!(masthead.mersis_no, "0123456789");
        assert_eq!(masthead.responsible_managers[0].title, "Genel Yayın Yönetmeni");
        assert_eq!(masthead.documents[0].url, "/uploads/ilkeler.pdf");
        assert!(masthead.logo.is_empty());
    }
}
