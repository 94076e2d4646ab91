//! Page singletons: contact, social media, masthead (künye), live stream
//!
//! Each of these is a single row (id = 1) edited from the panel.

use serde::{Deserialize, Serialize};

/// Contact page content
///
/// Phones, faxes and emails are ordered lists kept in JSON columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPage {
    pub address: String,
    pub phones: Vec<String>,
    pub faxes: Vec<String>,
    pub emails: Vec<String>,
    /// Map embed URL
    pub maps: String,
}

/// Site name and description, stored alongside the contact row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettings {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
    pub youtube: String,
}

/// Person listed as responsible on the masthead
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsibleManager {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
}

/// Downloadable document linked from the masthead
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MastheadDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Masthead (Künye): the broadcaster's legal imprint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Masthead {
    pub title: String,
    pub logo: String,
    pub broadcast_medium: String,
    pub license_type: String,
    pub broadcast_type: String,
    pub address: String,
    pub phone_fax: String,
    pub website: String,
    pub email: String,
    pub kep_address: String,
    pub tax_office_no: String,
    pub mersis_no: String,
    pub responsible_managers: Vec<ResponsibleManager>,
    pub viewer_representative_name: String,
    pub viewer_representative_email: String,
    pub documents: Vec<MastheadDocument>,
}

/// Live stream embed settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveStream {
    pub stream_url: String,
    pub stream_title: String,
    pub thumbnail_url: String,
    pub is_live: bool,
}
