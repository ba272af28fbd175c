use serde::{Deserialize, Serialize};

/// A remedy record linked to exactly one condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    pub id: u32,
    pub condition_id: u32,
    pub name: String,
    pub components: Vec<String>,
    pub description: String,
    /// Percentage, 0..=100.
    pub effectiveness: u8,
    pub research_basis: String,
}
