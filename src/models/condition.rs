use serde::{Deserialize, Serialize};

/// A health condition and the keyword lists the matcher scores against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Matched as case-insensitive substrings of user input.
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
}
