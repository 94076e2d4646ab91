//! Media partner database model

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct MediaPartnerModel {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub image: String,
}
