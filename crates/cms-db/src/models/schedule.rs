//! Schedule (yayin_akisi) database model

use chrono::NaiveTime;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ScheduleItemModel {
    pub id: i64,
    pub day_of_week: String,
    pub broadcast_time: NaiveTime,
    pub program_name: String,
}
