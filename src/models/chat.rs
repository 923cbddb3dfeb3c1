//! Chat-related models

use serde::{Deserialize, Serialize};

/// Conversation between the current user and one participant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participant_id: String,
    pub participant_name: String,
    pub participant_avatar: Option<String>,
    pub last_message: Option<String>,
    pub unread_count: u32,
    pub updated_at: String,
}

/// Single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: String,
    pub is_read: bool,
}
