//! Value objects - immutable types that represent domain concepts

mod broadcast_time;
mod permissions;
mod weekday;

pub use broadcast_time::{BroadcastTime, BroadcastTimeParseError};
pub use permissions::{permission_values, PermissionSet};
pub use weekday::{Weekday, WeekdayParseError};
