//! Schedule item - one slot of the weekly broadcast schedule (Yayın Akışı)

use crate::value_objects::{BroadcastTime, Weekday};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    pub id: i64,
    pub day: Weekday,
    pub time: BroadcastTime,
    pub program_name: String,
}
