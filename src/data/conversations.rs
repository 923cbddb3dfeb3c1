//! Seeded conversations and messages

use std::sync::LazyLock;

use crate::models::{ChatMessage, Conversation};

static CONVERSATIONS: LazyLock<Vec<Conversation>> = LazyLock::new(|| {
    vec![
        Conversation {
            id: "conv-1".to_string(),
            participant_id: "fl-1".to_string(),
            participant_name: "John Developer".to_string(),
            participant_avatar: None,
            last_message: Some("I pushed the checkout fix, can you take a look?".to_string()),
            unread_count: 2,
            updated_at: "2024-01-15T09:45:00Z".to_string(),
        },
        Conversation {
            id: "conv-2".to_string(),
            participant_id: "fl-2".to_string(),
            participant_name: "Sarah Designer".to_string(),
            participant_avatar: None,
            last_message: Some("The new mockups are in the shared folder.".to_string()),
            unread_count: 0,
            updated_at: "2024-01-14T17:20:00Z".to_string(),
        },
        Conversation {
            id: "conv-3".to_string(),
            participant_id: "fl-5".to_string(),
            participant_name: "Alex Writer".to_string(),
            participant_avatar: None,
            last_message: Some("Thanks for the quick review!".to_string()),
            unread_count: 0,
            updated_at: "2024-01-12T11:05:00Z".to_string(),
        },
    ]
});

static MESSAGES: LazyLock<Vec<ChatMessage>> = LazyLock::new(|| {
    vec![
        ChatMessage {
            id: "msg-1".to_string(),
            conversation_id: "conv-1".to_string(),
            sender_id: "me".to_string(),
            content: "The cart still drops items on refresh.".to_string(),
            timestamp: "2024-01-15T09:30:00Z".to_string(),
            is_read: true,
        },
        ChatMessage {
            id: "msg-2".to_string(),
            conversation_id: "conv-1".to_string(),
            sender_id: "fl-1".to_string(),
            content: "I pushed the checkout fix, can you take a look?".to_string(),
            timestamp: "2024-01-15T09:45:00Z".to_string(),
            is_read: false,
        },
        ChatMessage {
            id: "msg-3".to_string(),
            conversation_id: "conv-2".to_string(),
            sender_id: "fl-2".to_string(),
            content: "The new mockups are in the shared folder.".to_string(),
            timestamp: "2024-01-14T17:20:00Z".to_string(),
            is_read: true,
        },
    ]
});

/// All conversations, most recently updated first.
pub fn conversations() -> &'static [Conversation] {
    &CONVERSATIONS
}

/// Messages belonging to one conversation, oldest first.
pub fn messages_for(conversation_id: &str) -> Vec<&'static ChatMessage> {
    MESSAGES
        .iter()
        .filter(|m| m.conversation_id == conversation_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_filter_by_conversation() {
        assert_eq!(messages_for("conv-1").len(), 2);
        assert_eq!(messages_for("conv-2").len(), 1);
        assert!(messages_for("conv-404").is_empty());
    }
}
