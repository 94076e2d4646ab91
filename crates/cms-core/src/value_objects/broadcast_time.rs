//! Broadcast time of day (24-hour `HH:MM`)

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$").expect("valid time pattern")
});

/// A schedule slot time with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BroadcastTime {
    hour: u8,
    minute: u8,
}

impl BroadcastTime {
    /// Midnight, used when an existing slot is saved without a time
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create from hour and minute, `None` if out of range
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Check a raw string against the accepted `H:MM` / `HH:MM` format
    pub fn is_valid(s: &str) -> bool {
        TIME_PATTERN.is_match(s)
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Convert to a SQL `TIME` value
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or_default()
    }

    /// Build from a SQL `TIME` value, dropping seconds
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl fmt::Display for BroadcastTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid broadcast time: {0:?}")]
pub struct BroadcastTimeParseError(pub String);

impl FromStr for BroadcastTime {
    type Err = BroadcastTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TIME_PATTERN
            .captures(s)
            .ok_or_else(|| BroadcastTimeParseError(s.to_string()))?;

        let hour = caps[1]
            .parse()
            .map_err(|_| BroadcastTimeParseError(s.to_string()))?;
        let minute = caps[2]
            .parse()
            .map_err(|_| BroadcastTimeParseError(s.to_string()))?;

        Ok(Self { hour, minute })
    }
}

impl Serialize for BroadcastTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BroadcastTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_24_hour_times() {
        for s in ["00:00", "9:05", "09:05", "19:59", "23:59"] {
            assert!(BroadcastTime::is_valid(s), "{s} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_times() {
        for s in ["24:00", "12:60", "1230", "12:5", "ab:cd", "", " 12:00", "12:00:00"] {
            assert!(!BroadcastTime::is_valid(s), "{s} should be invalid");
            assert!(s.parse::<BroadcastTime>().is_err());
        }
    }

    #[test]
    fn test_display_is_zero_padded() {
        let time: BroadcastTime = "9:05".parse().unwrap();
        assert_eq!(time.to_string(), "09:05");
        assert_eq!(BroadcastTime::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn test_naive_time_conversion_drops_seconds() {
        let naive = NaiveTime::from_hms_opt(21, 30, 45).unwrap();
        let time = BroadcastTime::from_naive_time(naive);
        assert_eq!(time.to_string(), "21:30");
        assert_eq!(time.to_naive_time(), NaiveTime::from_hms_opt(21, 30, 0).unwrap());
    }

    #[test]
    fn test_ordering() {
        let early: BroadcastTime = "08:00".parse().unwrap();
        let late: BroadcastTime = "20:15".parse().unwrap();
        assert!(early < late);
        assert_eq!(BroadcastTime::new(20, 15), Some(late));
        assert_eq!(BroadcastTime::new(24, 0), None);
    }
}
