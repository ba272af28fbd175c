use serde::{Deserialize, Serialize};

/// Top conditions of a region. `prevalence[i]` is the percentage for
/// `top_conditions[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTrend {
    pub region: String,
    pub top_conditions: Vec<String>,
    pub prevalence: Vec<u8>,
}
