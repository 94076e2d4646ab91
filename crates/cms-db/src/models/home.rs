//! Homepage trailer (fragmanlar) and episode (bolumler) models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct TrailerModel {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub time: String,
    pub day: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct EpisodeModel {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
