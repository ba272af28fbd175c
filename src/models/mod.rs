pub mod condition;
pub mod conversation;
pub mod enums;
pub mod formula;
pub mod research;
pub mod trend;

pub use condition::Condition;
pub use conversation::ChatMessage;
pub use formula::Formula;
pub use research::ResearchPaper;
pub use trend::RegionTrend;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Convert a slice of string literals into owned strings.
pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
