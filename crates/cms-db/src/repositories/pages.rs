//! MySQL implementation of PageRepository
//!
//! Every page lives in a single row with `id = 1`. Reads fall back to empty
//! content when the row has not been created yet; writes upsert it.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::MySqlPool;
use tracing::{debug, instrument};

use cms_core::entities::{ContactPage, LiveStream, Masthead, SiteSettings, SocialMedia};
use cms_core::traits::{PageRepository, RepoResult};

use crate::models::{ContactModel, LiveStreamModel, MastheadModel, SocialMediaModel};

use super::error::map_db_error;

const PAGE_ROW_ID: i64 = 1;

/// MySQL implementation of PageRepository
#[derive(Clone)]
pub struct MySqlPageRepository {
    pool: MySqlPool,
}

impl MySqlPageRepository {
    /// Create a new MySqlPageRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn contact_row(&self) -> RepoResult<Option<ContactModel>> {
        sqlx::query_as::<_, ContactModel>(
            r"
            SELECT name, description, address, phones, faxes, emails, maps
            FROM contact
            WHERE id = ?
            ",
        )
        .bind(PAGE_ROW_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl PageRepository for MySqlPageRepository {
    #[instrument(skip(self))]
    async fn contact(&self) -> RepoResult<ContactPage> {
        Ok(self
            .contact_row()
            .await?
            .map(ContactPage::from)
            .unwrap_or_default())
    }

    #[instrument(skip_all)]
    async fn update_contact(&self, contact: &ContactPage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO contact (id, name, address, phones, faxes, emails, maps)
            VALUES (?, '', ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                address = VALUES(address),
                phones = VALUES(phones),
                faxes = VALUES(faxes),
                emails = VALUES(emails),
                maps = VALUES(maps)
            ",
        )
        .bind(PAGE_ROW_ID)
        .bind(&contact.address)
        .bind(Json(&contact.phones))
        .bind(Json(&contact.faxes))
        .bind(Json(&contact.emails))
        .bind(&contact.maps)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        debug!("Contact page updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn site_settings(&self) -> RepoResult<SiteSettings> {
        Ok(self
            .contact_row()
            .await?
            .map(SiteSettings::from)
            .unwrap_or_default())
    }

    #[instrument(skip_all)]
    async fn update_site_settings(&self, settings: &SiteSettings) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO contact (id, name, description)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                name = VALUES(name),
                description = VALUES(description)
            ",
        )
        .bind(PAGE_ROW_ID)
        .bind(&settings.name)
        .bind(&settings.description)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn social_media(&self) -> RepoResult<SocialMedia> {
        let row = sqlx::query_as::<_, SocialMediaModel>(
            r"
            SELECT facebook, instagram, twitter, linkedin, youtube
            FROM social_media
            WHERE id = ?
            ",
        )
        .bind(PAGE_ROW_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(SocialMedia::from).unwrap_or_default())
    }

    #[instrument(skip_all)]
    async fn update_social_media(&self, social: &SocialMedia) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO social_media (id, facebook, instagram, twitter, linkedin, youtube)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                facebook = VALUES(facebook),
                instagram = VALUES(instagram),
                twitter = VALUES(twitter),
                linkedin = VALUES(linkedin),
                youtube = VALUES(youtube)
            ",
        )
        .bind(PAGE_ROW_ID)
        .bind(&social.facebook)
        .bind(&social.instagram)
        .bind(&social.twitter)
        .bind(&social.linkedin)
        .bind(&social.youtube)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn masthead(&self) -> RepoResult<Masthead> {
        let row = sqlx::query_as::<_, MastheadModel>(
            r"
            SELECT unvan, logo, yayin_ortami, lisans_tipi, yayin_turu, adres,
                   telefon_faks, internet_adresi, email, kep_adresi, vergi_daire_no,
                   mersis_no, sorumlular, izleyici_temsilcisi_ad,
                   izleyici_temsilcisi_email, dokumanlar
            FROM kunye
            WHERE id = ?
            ",
        )
        .bind(PAGE_ROW_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Masthead::from).unwrap_or_default())
    }

    #[instrument(skip_all)]
    async fn save_masthead(&self, masthead: &Masthead) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO kunye
                (id, unvan, logo, yayin_ortami, lisans_tipi, yayin_turu, adres,
                 telefon_faks, internet_adresi, email, kep_adresi, vergi_daire_no,
                 mersis_no, sorumlular, izleyici_temsilcisi_ad,
                 izleyici_temsilcisi_email, dokumanlar)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                unvan = VALUES(unvan),
                logo = VALUES(logo),
                yayin_ortami = VALUES(yayin_ortami),
                lisans_tipi = VALUES(lisans_tipi),
                yayin_turu = VALUES(yayin_turu),
                adres = VALUES(adres),
                telefon_faks = VALUES(telefon_faks),
                internet_adresi = VALUES(internet_adresi),
                email = VALUES(email),
                kep_adresi = VALUES(kep_adresi),
                vergi_daire_no = VALUES(vergi_daire_no),
                mersis_no = VALUES(mersis_no),
                sorumlular = VALUES(sorumlular),
                izleyici_temsilcisi_ad = VALUES(izleyici_temsilcisi_ad),
                izleyici_temsilcisi_email = VALUES(izleyici_temsilcisi_email),
                dokumanlar = VALUES(dokumanlar)
            ",
        )
        .bind(PAGE_ROW_ID)
        .bind(&masthead.title)
        .bind(&masthead.logo)
        .bind(&masthead.broadcast_medium)
        .bind(&masthead.license_type)
        .bind(&masthead.broadcast_type)
        .bind(&masthead.address)
        .bind(&masthead.phone_fax)
        .bind(&masthead.website)
        .bind(&masthead.email)
        .bind(&masthead.kep_address)
        .bind(&masthead.tax_office_no)
        .bind(&masthead.mersis_no)
        .bind(Json(&masthead.responsible_managers))
        .bind(&masthead.viewer_representative_name)
        .bind(&masthead.viewer_representative_email)
        .bind(Json(&masthead.documents))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        debug!("Masthead saved");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn live_stream(&self) -> RepoResult<LiveStream> {
        let row = sqlx::query_as::<_, LiveStreamModel>(
            r"
            SELECT stream_url, stream_title, thumbnail_url, is_live
            FROM canli_yayin
            WHERE id = ?
            ",
        )
        .bind(PAGE_ROW_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(LiveStream::from).unwrap_or_default())
    }

    #[instrument(skip_all, fields(is_live = stream.is_live))]
    async fn update_live_stream(&self, stream: &LiveStream) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO canli_yayin (id, stream_url, stream_title, thumbnail_url, is_live)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                stream_url = VALUES(stream_url),
                stream_title = VALUES(stream_title),
                thumbnail_url = VALUES(thumbnail_url),
                is_live = VALUES(is_live)
            ",
        )
        .bind(PAGE_ROW_ID)
        .bind(&stream.stream_url)
        .bind(&stream.stream_title)
        .bind(&stream.thumbnail_url)
        .bind(stream.is_live)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
