//! Broadcast weekday, keyed by its Turkish name
//!
//! The schedule (Yayın Akışı) stores and exchanges days by their Turkish
//! names. Ordering follows the broadcast week, Monday first.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Day of the broadcast week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday through Sunday
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Turkish day name as stored in `yayin_akisi.day_of_week`
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Pazartesi",
            Self::Tuesday => "Salı",
            Self::Wednesday => "Çarşamba",
            Self::Thursday => "Perşembe",
            Self::Friday => "Cuma",
            Self::Saturday => "Cumartesi",
            Self::Sunday => "Pazar",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a day name outside the seven known names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day of week: {0}")]
pub struct WeekdayParseError(pub String);

impl FromStr for Weekday {
    type Err = WeekdayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == s.trim())
            .ok_or_else(|| WeekdayParseError(s.to_string()))
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_turkish_names() {
        assert_eq!("Pazartesi".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Salı".parse::<Weekday>().unwrap(), Weekday::Tuesday);
        assert_eq!("Çarşamba".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert_eq!("Pazar".parse::<Weekday>().unwrap(), Weekday::Sunday);
    }

    #[test]
    fn test_parse_unknown_day() {
        let err = "Monday".parse::<Weekday>().unwrap_err();
        assert_eq!(err.to_string(), "unknown day of week: Monday");
        // ASCII spelling is not accepted
        assert!("Sali".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_week_order() {
        let mut days = vec![Weekday::Sunday, Weekday::Monday, Weekday::Friday];
        days.sort();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Friday, Weekday::Sunday]);
    }

    #[test]
    fn test_serde_uses_turkish_name() {
        let json = serde_json::to_string(&Weekday::Thursday).unwrap();
        assert_eq!(json, "\"Perşembe\"");

        let day: Weekday = serde_json::from_str("\"Cumartesi\"").unwrap();
        assert_eq!(day, Weekday::Saturday);
    }
}
