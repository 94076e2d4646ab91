//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Mutation responses
//! carry a `{title, description}` message object that the panel shows as a
//! toast; resource-specific fields are flattened next to it.

use chrono::{DateTime, Utc};
use cms_core::entities::{MastheadDocument, ResponsibleManager};
use cms_core::Weekday;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// ============================================================================
// Common Response Types
// ============================================================================

pub const SUCCESS_TITLE: &str = "Başarılı";
pub const ERROR_TITLE: &str = "Hata";

/// Flags go out as MySQL `TINYINT` values; the public site compares with `=== 1`
#[allow(clippy::trivially_copy_pass_by_ref)]
fn tinyint<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

/// Toast message shown by the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// Outcome of a mutation
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: Notice,
}

impl ActionResponse {
    pub fn ok(description: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Notice {
                title: SUCCESS_TITLE.to_string(),
                description: description.into(),
            },
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Notice {
                title: ERROR_TITLE.to_string(),
                description: description.into(),
            },
        }
    }
}

/// Mutation that created a row
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    #[serde(flatten)]
    pub action: ActionResponse,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(description: impl Into<String>, id: i64) -> Self {
        Self {
            action: ActionResponse::ok(description),
            id,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
    pub permissions: Vec<PermissionResponse>,
}

/// Current user with freshly loaded permissions
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
    pub permissions: Vec<PermissionResponse>,
}

// ============================================================================
// User & Group Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub group_id: Option<i64>,
    pub group_name: Option<String>,
    pub status: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionResponse {
    pub id: i64,
    pub name: String,
    pub value: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub members_count: i64,
    pub permissions: Vec<PermissionResponse>,
}

/// Group option for the user form
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersPageResponse {
    pub users: Vec<UserResponse>,
    pub groups: Vec<GroupSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupsPageResponse {
    pub groups: Vec<GroupResponse>,
    /// The whole catalog, for the permission picker
    pub permissions: Vec<PermissionResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPermissionsResponse {
    #[serde(flatten)]
    pub action: ActionResponse,
    pub group_id: i64,
    pub permissions: Vec<PermissionResponse>,
    /// The edited group is the caller's own; the panel should refresh
    pub affects_current_user: bool,
}

// ============================================================================
// Program Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProgramResponse {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub presenter: String,
    pub broadcast_day: String,
    pub broadcast_time: String,
    pub image: String,
    pub category: String,
    #[serde(serialize_with = "tinyint")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramsResponse {
    pub programs: Vec<ProgramResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramEnvelope {
    pub program: ProgramResponse,
}

/// Aggregate result of a program batch update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramBatchResponse {
    #[serde(flatten)]
    pub action: ActionResponse,
    pub updated: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub partial_failure: bool,
}

// ============================================================================
// Schedule Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSlotResponse {
    pub id: i64,
    /// `HH:MM`, empty for the editor placeholder
    pub time: String,
    pub program: String,
}

impl ScheduleSlotResponse {
    /// Blank row handed to the editor for a day without slots
    pub fn placeholder() -> Self {
        Self {
            id: 0,
            time: String::new(),
            program: String::new(),
        }
    }
}

/// Slots of the whole week, serialized as a map in Monday→Sunday order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSchedule(pub Vec<(Weekday, Vec<ScheduleSlotResponse>)>);

impl WeekSchedule {
    pub fn day(&self, day: Weekday) -> Option<&[ScheduleSlotResponse]> {
        self.0
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, slots)| slots.as_slice())
    }
}

impl Serialize for WeekSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, slots) in &self.0 {
            map.serialize_entry(day.as_str(), slots)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub schedule_items: WeekSchedule,
}

/// Report of a schedule submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdateResponse {
    #[serde(flatten)]
    pub action: ActionResponse,
    pub processed_days: Vec<Weekday>,
    pub failed_days: Vec<Weekday>,
    pub inserted: usize,
    pub updated: usize,
    pub deleted: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub partial_failure: bool,
}

// ============================================================================
// Home Page Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TrailerResponse {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub time: String,
    pub day: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EpisodeResponse {
    pub id: i64,
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeResponse {
    pub fragmanlar: Vec<TrailerResponse>,
    pub bolumler: Vec<EpisodeResponse>,
}

// ============================================================================
// Media Partner Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MediaPartnerResponse {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPartnersResponse {
    pub media_partners: Vec<MediaPartnerResponse>,
}

// ============================================================================
// Page Singleton Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamResponse {
    pub stream_url: String,
    pub stream_title: String,
    pub thumbnail_url: String,
    pub is_live: bool,
}

/// Masthead, keyed by the Turkish column names the panel edits
#[derive(Debug, Clone, Serialize)]
pub struct MastheadResponse {
    pub unvan: String,
    pub logo: String,
    pub yayin_ortami: String,
    pub lisans_tipi: String,
    pub yayin_turu: String,
    pub adres: String,
    pub telefon_faks: String,
    pub internet_adresi: String,
    pub email: String,
    pub kep_adresi: String,
    pub vergi_daire_no: String,
    pub mersis_no: String,
    pub sorumlular: Vec<ResponsibleManager>,
    pub izleyici_temsilcisi_ad: String,
    pub izleyici_temsilcisi_email: String,
    pub dokumanlar: Vec<MastheadDocument>,
}

/// Contact row: the site name and description live on it too
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: Vec<String>,
    #[serde(rename = "faxs")]
    pub fax: Vec<String>,
    pub email: Vec<String>,
    pub maps: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialMediaResponse {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
    pub youtube: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPageResponse {
    pub contact: ContactResponse,
    pub socialmedia: SocialMediaResponse,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCountsResponse {
    pub all_programs: i64,
    pub active_programs: i64,
    pub fragmanlar: i64,
    pub bolumler: i64,
    pub users: i64,
    pub partners: i64,
    pub is_live: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub counts: DashboardCountsResponse,
}

// ============================================================================
// Upload Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    /// Public path of the stored file, e.g. `/uploads/1700000000000_abc.png`
    pub file_path: String,
    pub original_name: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
