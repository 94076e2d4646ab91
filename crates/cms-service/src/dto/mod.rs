//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AddGroupRequest, AddUserRequest, ChangePasswordRequest, ContactUpdateRequest,
    EpisodePayload, GroupPermissionsRequest, HomeUpdateRequest, LiveStreamRequest, LoginRequest,
    MastheadRequest, MediaPartnerPayload, MediaPartnersUpdateRequest, PermissionRef,
    ProgramPayload, ProgramsRequest, ScheduleUpdateRequest, SiteSettingsRequest,
    SocialMediaRequest, TrailerPayload, UpdateGroupRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    ActionResponse, ContactPageResponse, ContactResponse, CreatedResponse,
    DashboardCountsResponse, DashboardResponse, EpisodeResponse, GroupPermissionsResponse,
    GroupResponse, GroupSummary, GroupsPageResponse, HealthChecks, HealthResponse, HomeResponse,
    LiveStreamResponse, LoginResponse, MastheadResponse, MeResponse, MediaPartnerResponse,
    MediaPartnersResponse, Notice, PermissionResponse, ProgramBatchResponse, ProgramEnvelope,
    ProgramResponse, ProgramsResponse, ReadinessResponse, ScheduleResponse, ScheduleSlotResponse,
    ScheduleUpdateResponse, SocialMediaResponse, TrailerResponse, UploadResponse,
    UserResponse, UsersPageResponse, WeekSchedule, ERROR_TITLE, SUCCESS_TITLE,
};
