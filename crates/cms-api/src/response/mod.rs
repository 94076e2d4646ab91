//! Response types and error handling for API endpoints
//!
//! Error bodies carry the same `{success, message: {title, description}}`
//! envelope as successful mutations, plus a machine-readable `error` block.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cms_common::AppError;
use cms_core::DomainError;
use cms_service::dto::{Notice, ERROR_TITLE};
use cms_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::InvalidPath(_) | Self::InvalidBody(_) => 400,
            Self::Internal(_) => 500,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Text shown to panel users in the toast description
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Service(ServiceError::Validation(msg) | ServiceError::BatchFailed(msg)) => {
                msg.clone()
            }
            Self::Service(ServiceError::Domain(DomainError::ValidationError(msg)))
            | Self::Domain(DomainError::ValidationError(msg)) => msg.clone(),
            Self::Internal(_) => "Sunucu hatası".to_string(),
            other => other.to_string(),
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid path parameter error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: Notice,
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let details = if let Self::Service(ServiceError::InvalidFields(errors)) = &self {
            Some(serde_json::to_value(errors).unwrap_or_default())
        } else {
            None
        };

        let body = ErrorBody {
            success: false,
            message: Notice {
                title: ERROR_TITLE.to_string(),
                description: self.description(),
            },
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper for successful JSON responses
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::App(AppError::MissingAuth).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::App(AppError::TokenExpired).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::invalid_path("abc").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Domain(DomainError::ProgramNotFound(3)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Domain(DomainError::EmailAlreadyExists).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Service(ServiceError::batch_failed("x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_codes() {
        assert_eq!(ApiError::App(AppError::MissingAuth).error_code(), "MISSING_AUTH");
        assert_eq!(ApiError::invalid_path("abc").error_code(), "INVALID_PATH_PARAMETER");
        assert_eq!(
            ApiError::Domain(DomainError::MissingPermission("edit_home".into())).error_code(),
            "MISSING_PERMISSIONS"
        );
    }

    #[tokio::test]
    async fn test_error_body_envelope() {
        let (status, body) =
            body_of(ApiError::Service(ServiceError::validation("Program başlığı gereklidir"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"]["title"], "Hata");
        assert_eq!(body["message"]["description"], "Program başlığı gereklidir");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"].get("details").is_none());
    }

    #[tokio::test]
    async fn test_field_errors_carry_details() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("email", validator::ValidationError::new("email"));

        let (status, body) = body_of(ApiError::Service(ServiceError::from(errors))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["details"]["email"].is_array());
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let (status, body) = body_of(ApiError::internal(anyhow::anyhow!("pool exhausted"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"]["description"], "Sunucu hatası");
        assert_eq!(body["error"]["message"], "Internal server error");
    }
}
