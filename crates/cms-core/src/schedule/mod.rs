//! Weekly schedule reconciliation
//!
//! The panel submits the full list of slots for each day. [`plan_day`] turns one
//! day's submission plus the ids currently stored for that day into the set of
//! updates, inserts and deletes that make storage match the submission. The
//! plan is pure; executing it (inside a transaction) is the repository's job.
//!
//! Rules, applied per entry in submission order:
//! - an entry whose time and program are both blank is ignored;
//! - an entry with a non-empty time that is not exactly `H:MM`/`HH:MM` is
//!   ignored; the time is matched as submitted, so padded times are rejected;
//! - an entry whose id matches a stored row of the day updates that row
//!   (a blank time becomes `00:00`) and keeps it;
//! - otherwise an entry with both a program and a valid time is inserted.
//!
//! Stored rows that were not kept are deleted, but only when at least one
//! entry of the submission carries both a program and a time. A submission of
//! nothing but blank rows never wipes a day.

use std::collections::HashSet;

use serde::Deserialize;

use crate::value_objects::{BroadcastTime, Weekday};

/// One submitted slot, as sent by the panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScheduleEntry {
    /// Id of an existing slot; absent, zero or unknown ids mean "new"
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub program: String,
}

impl ScheduleEntry {
    pub fn new(id: Option<i64>, time: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            id,
            time: time.into(),
            program: program.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.time.trim().is_empty() && !self.program.trim().is_empty()
    }
}

/// Update of an existing slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotUpdate {
    pub id: i64,
    pub time: BroadcastTime,
    pub program_name: String,
}

/// A slot to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotInsert {
    pub time: BroadcastTime,
    pub program_name: String,
}

/// The writes needed to reconcile one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub day: Weekday,
    pub updates: Vec<SlotUpdate>,
    pub inserts: Vec<SlotInsert>,
    pub deletes: Vec<i64>,
    /// Entries that produced no write
    pub skipped: usize,
}

impl DayPlan {
    /// Counts of what executing this plan does
    pub fn outcome(&self) -> DayOutcome {
        DayOutcome {
            day: self.day,
            inserted: self.inserts.len(),
            updated: self.updates.len(),
            deleted: self.deletes.len(),
            skipped: self.skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.inserts.is_empty() && self.deletes.is_empty()
    }
}

/// Result of reconciling one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOutcome {
    pub day: Weekday,
    pub inserted: usize,
    pub updated: usize,
    pub deleted: usize,
    pub skipped: usize,
}

/// Plan the reconciliation of `day` given the ids stored for it
pub fn plan_day(day: Weekday, existing_ids: &[i64], entries: &[ScheduleEntry]) -> DayPlan {
    let existing: HashSet<i64> = existing_ids.iter().copied().collect();
    let mut kept: HashSet<i64> = HashSet::new();

    let mut plan = DayPlan {
        day,
        updates: Vec::new(),
        inserts: Vec::new(),
        deletes: Vec::new(),
        skipped: 0,
    };

    for entry in entries {
        let program = entry.program.trim();

        if entry.time.trim().is_empty() && program.is_empty() {
            plan.skipped += 1;
            continue;
        }

        let parsed = if entry.time.is_empty() {
            None
        } else {
            match entry.time.parse::<BroadcastTime>() {
                Ok(t) => Some(t),
                Err(_) => {
                    plan.skipped += 1;
                    continue;
                }
            }
        };

        match entry.id.filter(|id| *id > 0 && existing.contains(id)) {
            Some(id) => {
                plan.updates.push(SlotUpdate {
                    id,
                    time: parsed.unwrap_or(BroadcastTime::MIDNIGHT),
                    program_name: program.to_string(),
                });
                kept.insert(id);
            }
            None => match parsed {
                Some(time) if !program.is_empty() => plan.inserts.push(SlotInsert {
                    time,
                    program_name: program.to_string(),
                }),
                _ => plan.skipped += 1,
            },
        }
    }

    if entries.iter().any(ScheduleEntry::is_complete) {
        plan.deletes = existing_ids
            .iter()
            .copied()
            .filter(|id| !kept.contains(id))
            .collect();
    }

    plan
}
