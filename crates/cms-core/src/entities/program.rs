//! Program entity - a show in the channel's lineup

use chrono::{DateTime, Utc};

/// Program entity
///
/// `broadcast_day` and `broadcast_time` are free display text here
/// (e.g. "Hafta içi", "20:00"); the structured weekly slots live in the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub presenter: String,
    pub broadcast_day: String,
    pub broadcast_time: String,
    pub image: String,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Program {
    /// Create a new active program with only a title; other text fields empty
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            subtitle: String::new(),
            description: String::new(),
            presenter: String::new(),
            broadcast_day: String::new(),
            broadcast_time: String::new(),
            image: String::new(),
            category: String::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the program as edited now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_program_defaults() {
        let program = Program::new("Akşam Haberleri".to_string());
        assert_eq!(program.title, "Akşam Haberleri");
        assert!(program.is_active);
        assert!(program.subtitle.is_empty());
        assert!(program.image.is_empty());
        assert_eq!(program.created_at, program.updated_at);
    }

    #[test]
    fn test_touch_moves_updated_at() {
        let mut program = Program::new("Spor".to_string());
        let before = program.updated_at;
        program.touch();
        assert!(program.updated_at >= before);
        assert_eq!(program.created_at, before);
    }
}
