//! Program database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the programs table
#[derive(Debug, Clone, FromRow)]
pub struct ProgramModel {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub description: Option<String>,
    pub presenter: String,
    pub broadcast_day: String,
    pub broadcast_time: String,
    pub image: String,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
