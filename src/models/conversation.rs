use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::ChatRole;

/// One entry of a session transcript. Ids are assigned by the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u32,
    pub role: ChatRole,
    pub content: String,
    pub sent_at: NaiveDateTime,
}
