//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("No user registered with email: {0}")]
    EmailNotFound(String),

    #[error("User group not found: {0}")]
    GroupNotFound(i64),

    #[error("Program not found: {0}")]
    ProgramNotFound(i64),

    #[error("Schedule item not found: {0}")]
    ScheduleItemNotFound(i64),

    #[error("Media partner not found: {0}")]
    MediaPartnerNotFound(i64),

    #[error("Trailer not found: {0}")]
    TrailerNotFound(i64),

    #[error("Episode not found: {0}")]
    EpisodeNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown day of week: {0}")]
    InvalidWeekday(String),

    #[error("Unknown permission id: {0}")]
    UnknownPermission(i64),

    #[error("Invalid upload destination: {0}")]
    InvalidDestination(String),

    #[error("Old password is incorrect")]
    WrongOldPassword,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    #[error("User account is inactive")]
    InactiveUser,

    #[error("Cannot delete your own account")]
    CannotDeleteSelf,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::EmailNotFound(_) => "UNKNOWN_USER",
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",
            Self::ProgramNotFound(_) => "UNKNOWN_PROGRAM",
            Self::ScheduleItemNotFound(_) => "UNKNOWN_SCHEDULE_ITEM",
            Self::MediaPartnerNotFound(_) => "UNKNOWN_MEDIA_PARTNER",
            Self::TrailerNotFound(_) => "UNKNOWN_TRAILER",
            Self::EpisodeNotFound(_) => "UNKNOWN_EPISODE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidWeekday(_) => "INVALID_WEEKDAY",
            Self::UnknownPermission(_) => "UNKNOWN_PERMISSION",
            Self::InvalidDestination(_) => "INVALID_DESTINATION",
            Self::WrongOldPassword => "WRONG_OLD_PASSWORD",

            // Authorization
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::InactiveUser => "INACTIVE_USER",
            Self::CannotDeleteSelf => "CANNOT_DELETE_SELF",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::EmailNotFound(_)
                | Self::GroupNotFound(_)
                | Self::ProgramNotFound(_)
                | Self::ScheduleItemNotFound(_)
                | Self::MediaPartnerNotFound(_)
                | Self::TrailerNotFound(_)
                | Self::EpisodeNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidWeekday(_)
                | Self::UnknownPermission(_)
                | Self::InvalidDestination(_)
                | Self::WrongOldPassword
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::MissingPermission(_) | Self::InactiveUser | Self::CannotDeleteSelf
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }
}
