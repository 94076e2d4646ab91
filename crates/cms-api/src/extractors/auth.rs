//! Authentication extractors
//!
//! The panel sends the raw token in the `Authorization` header; a
//! `Bearer ` prefix is accepted as well.

use std::ops::Deref;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use cms_common::AppError;
use cms_service::{PermissionService, Session};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: i64,
    /// Group recorded in the token at login
    pub group_id: Option<i64>,
}

/// Token carried by the request, if any
fn token_from_parts(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = token_from_parts(parts).ok_or(AppError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let claims = app_state.jwt_service().decode_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            e
        })?;

        Ok(AuthUser {
            user_id: claims.user_id,
            group_id: claims.group_id,
        })
    }
}

/// Per-request session: the token's user, reloaded with the permissions
/// their group holds right now
#[derive(Debug, Clone)]
pub struct AuthSession(pub Session);

impl Deref for AuthSession {
    type Target = Session;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let app_state = AppState::from_ref(state);
        let session = PermissionService::new(app_state.service_context())
            .load_session(auth.user_id)
            .await?;

        Ok(AuthSession(session))
    }
}
