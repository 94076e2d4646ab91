//! Dashboard counters

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub all_programs: i64,
    pub active_programs: i64,
    pub trailers: i64,
    pub episodes: i64,
    pub users: i64,
    pub partners: i64,
    pub is_live: bool,
}
