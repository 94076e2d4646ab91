//! Permission entity - one row of the static permission catalog

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    pub id: i64,
    /// Human-readable label shown in the panel
    pub name: String,
    /// Machine key used for checks
    pub value: String,
    pub category: String,
    pub description: String,
}
