use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchPaper {
    pub id: u32,
    pub title: String,
    /// "Surname, I." form.
    pub authors: Vec<String>,
    pub journal: String,
    pub year: u16,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub keywords: Vec<String>,
    /// Formula names, not ids; some refer to formulas outside the catalog.
    pub relevant_formulas: Vec<String>,
}
