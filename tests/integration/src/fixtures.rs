//! Test fixtures and data generators
//!
//! Provides seeded accounts and reusable request bodies.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use cms_api::AppState;
use cms_core::{User, UserGroup, UserStatus};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::helpers::{assert_json, TestServer};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique suffix for test data, distinct across runs against the same database
pub fn unique_suffix() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{millis}{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// A seeded panel account
#[derive(Debug, Clone)]
pub struct Account {
    pub user_id: i64,
    pub group_id: i64,
    pub email: String,
    pub password: String,
}

impl Account {
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Create a group holding `permissions` and one active member
///
/// Goes straight to the repositories so that tests do not depend on an
/// existing administrator.
pub async fn seed_account(state: &AppState, permissions: &[&str]) -> Result<Account> {
    let ctx = state.service_context();
    let suffix = unique_suffix();

    let group_id = ctx
        .group_repo()
        .create(&UserGroup::new(
            format!("Test grubu {suffix}"),
            "Entegrasyon testi".to_string(),
        ))
        .await?;

    let ids: Vec<i64> = ctx
        .permission_repo()
        .list()
        .await?
        .into_iter()
        .filter(|p| permissions.contains(&p.value.as_str()))
        .map(|p| p.id)
        .collect();
    ctx.group_repo().replace_permissions(group_id, &ids).await?;

    let email = format!("test{suffix}@kanal.example");
    let password = "Deneme123!".to_string();
    let hash = ctx.password_service().hash(&password)?;
    let user_id = ctx
        .user_repo()
        .create(
            &User::new(
                format!("Test Kullanıcı {suffix}"),
                email.clone(),
                Some(group_id),
                UserStatus::Active,
            ),
            &hash,
        )
        .await?;

    Ok(Account {
        user_id,
        group_id,
        email,
        password,
    })
}

/// Log in and return the token
pub async fn login(server: &TestServer, account: &Account) -> Result<String> {
    let response = server
        .post("/api/users/login", &account.login_request())
        .await?;
    let body: LoginBody = assert_json(response, StatusCode::OK).await?;
    Ok(body.token)
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub user: UserBody,
    pub token: String,
    pub permissions: Vec<PermissionBody>,
}

/// User as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub group_id: Option<i64>,
    pub status: i32,
}

/// Permission as returned by the API
#[derive(Debug, Deserialize)]
pub struct PermissionBody {
    pub id: i64,
    pub value: String,
}

/// Program body for the add endpoint
pub fn program_body() -> Value {
    let suffix = unique_suffix();
    json!({
        "title": format!("Akşam Haberleri {suffix}"),
        "subtitle": "Günün özeti",
        "description": "Bölgeden ve dünyadan haberler",
        "presenter": "Ayşe Yılmaz",
        "broadcast_day": "Hafta içi",
        "broadcast_time": "19:00",
        "image": "/uploads/haber.jpg",
        "category": "Haber",
        "is_active": 1
    })
}

/// Schedule update body for a single day
pub fn schedule_body(day: &str, entries: Value) -> Value {
    json!({ "scheduleItems": { day: entries } })
}
