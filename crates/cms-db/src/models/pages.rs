//! Single-row page models and the dashboard counters row

use sqlx::types::Json;
use sqlx::FromRow;

use cms_core::entities::{MastheadDocument, ResponsibleManager};

/// `contact` row; also holds the site name and description
#[derive(Debug, Clone, FromRow)]
pub struct ContactModel {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phones: Option<Json<Vec<String>>>,
    pub faxes: Option<Json<Vec<String>>>,
    pub emails: Option<Json<Vec<String>>>,
    pub maps: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct SocialMediaModel {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
    pub youtube: String,
}

/// `kunye` row
#[derive(Debug, Clone, FromRow)]
pub struct MastheadModel {
    pub unvan: String,
    pub logo: String,
    pub yayin_ortami: String,
    pub lisans_tipi: String,
    pub yayin_turu: String,
    pub adres: Option<String>,
    pub telefon_faks: String,
    pub internet_adresi: String,
    pub email: String,
    pub kep_adresi: String,
    pub vergi_daire_no: String,
    pub mersis_no: String,
    pub sorumlular: Option<Json<Vec<ResponsibleManager>>>,
    pub izleyici_temsilcisi_ad: String,
    pub izleyici_temsilcisi_email: String,
    pub dokumanlar: Option<Json<Vec<MastheadDocument>>>,
}

/// `canli_yayin` row
#[derive(Debug, Clone, FromRow)]
pub struct LiveStreamModel {
    pub stream_url: String,
    pub stream_title: String,
    pub thumbnail_url: String,
    pub is_live: bool,
}

/// Aggregated counters for the panel dashboard
#[derive(Debug, Clone, FromRow)]
pub struct DashboardModel {
    pub all_programs: i64,
    pub active_programs: i64,
    pub trailers: i64,
    pub episodes: i64,
    pub users: i64,
    pub partners: i64,
    pub is_live: i64,
}
