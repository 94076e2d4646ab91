//! Homepage content: trailers (fragman) and episodes (bölüm)

use chrono::{DateTime, Utc};

/// A trailer shown on the homepage carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trailer {
    pub id: i64,
    pub title: String,
    pub image: String,
    /// Display text for the airing time, e.g. "21:00"
    pub time: String,
    /// Display text for the airing day, e.g. "Cuma"
    pub day: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// An episode card shown on the homepage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Trailer {
    /// Rows with a positive id already exist and are updated in place
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

impl Episode {
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}
