//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; the ones with rules beyond
//! "field present" also implement `Validate`. Field names follow what the
//! panel sends: snake_case for programs and the masthead, camelCase for
//! users, groups and the live stream.

use std::collections::BTreeMap;

use cms_core::entities::{MastheadDocument, ResponsibleManager};
use cms_core::schedule::ScheduleEntry;
use serde::Deserialize;
use validator::Validate;

/// Lenient decoders for values the panel sends as numbers, strings or booleans
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn as_flag(value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_i64().map(|n| n != 0),
            Value::String(s) => match s.trim() {
                "1" | "true" => Some(true),
                "0" | "false" | "" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    fn as_int(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// `true`, `1`, `"1"` and `"true"` are on; absent or `null` is `None`
    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(v) => as_flag(&v)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("expected a boolean, got {v}"))),
        }
    }

    /// Integer given as a number or a numeric string
    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(v) => as_int(&v)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("expected an integer, got {v}"))),
        }
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Change the caller's own password
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Old password is required"))]
    pub old_password: String,

    #[validate(length(min = 6, max = 128, message = "New password must be 6-128 characters"))]
    pub new_password: String,
}

// ============================================================================
// Program Requests
// ============================================================================

/// One program as sent by the panel
///
/// Every field is optional so that a batch can carry partial items; missing
/// text fields are stored as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramPayload {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub presenter: Option<String>,
    #[serde(default)]
    pub broadcast_day: Option<String>,
    #[serde(default)]
    pub broadcast_time: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,
}

/// Program update/add body: `{programs: [...]}` or a single program object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProgramsRequest {
    Batch { programs: Vec<ProgramPayload> },
    Single(ProgramPayload),
}

impl ProgramsRequest {
    /// All submitted programs, in order
    pub fn into_items(self) -> Vec<ProgramPayload> {
        match self {
            Self::Batch { programs } => programs,
            Self::Single(program) => vec![program],
        }
    }

    /// The program to add: the first of a batch, or the single object
    pub fn into_first(self) -> Option<ProgramPayload> {
        self.into_items().into_iter().next()
    }
}

// ============================================================================
// Schedule Requests
// ============================================================================

/// Weekly schedule submission, keyed by Turkish day name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdateRequest {
    #[serde(default)]
    pub schedule_items: BTreeMap<String, Vec<ScheduleEntry>>,
}

// ============================================================================
// Home Page Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrailerPayload {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub day: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpisodePayload {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,
}

/// Homepage bulk upsert
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeUpdateRequest {
    #[serde(default)]
    pub fragmanlar: Vec<TrailerPayload>,
    #[serde(default)]
    pub bolumler: Vec<EpisodePayload>,
}

// ============================================================================
// Media Partner Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MediaPartnerPayload {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Partner name must be 1-255 characters"))]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MediaPartnersUpdateRequest {
    #[serde(default)]
    #[validate(nested)]
    pub media_partners: Vec<MediaPartnerPayload>,
}

// ============================================================================
// Page Singleton Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamRequest {
    #[serde(default)]
    pub stream_url: String,
    #[serde(default)]
    pub stream_title: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_live: Option<bool>,
}

/// Masthead (künye) body, keyed by the Turkish column names
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MastheadRequest {
    #[serde(default)]
    pub unvan: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub yayin_ortami: String,
    #[serde(default)]
    pub lisans_tipi: String,
    #[serde(default)]
    pub yayin_turu: String,
    #[serde(default)]
    pub adres: String,
    #[serde(default)]
    pub telefon_faks: String,
    #[serde(default)]
    pub internet_adresi: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub kep_adresi: String,
    #[serde(default)]
    pub vergi_daire_no: String,
    #[serde(default)]
    pub mersis_no: String,
    #[serde(default)]
    pub sorumlular: Vec<ResponsibleManager>,
    #[serde(default)]
    pub izleyici_temsilcisi_ad: String,
    #[serde(default)]
    pub izleyici_temsilcisi_email: String,
    #[serde(default)]
    pub dokumanlar: Vec<MastheadDocument>,
}

/// Contact page body; list fields use the panel's singular names
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactUpdateRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Vec<String>,
    #[serde(default)]
    pub fax: Vec<String>,
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub maps: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SiteSettingsRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Site name must be at most 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialMediaRequest {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub youtube: String,
}

// ============================================================================
// User & Group Requests
// ============================================================================

/// Add user: every field is required
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,

    #[serde(default, deserialize_with = "lenient::int")]
    #[validate(required(message = "Group is required"))]
    pub group_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient::int")]
    #[validate(required(message = "Status is required"))]
    pub status: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(deserialize_with = "lenient::int")]
    #[validate(required(message = "User id is required"))]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default, deserialize_with = "lenient::int")]
    pub group_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient::int")]
    pub status: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddGroupRequest {
    #[validate(length(min = 1, max = 255, message = "Group name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Group description is required"))]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGroupRequest {
    #[serde(deserialize_with = "lenient::int")]
    #[validate(required(message = "Group id is required"))]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "Group name must be 1-255 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

/// Permission reference; the panel sends whole permission objects
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionRef {
    #[serde(deserialize_with = "lenient::int")]
    pub id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GroupPermissionsRequest {
    #[serde(deserialize_with = "lenient::int")]
    #[validate(required(message = "groupId is required"))]
    pub group_id: Option<i64>,

    pub permissions: Vec<PermissionRef>,
}
