use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Denormalized copy of the newest message, kept on the chat for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastMessage {
    pub sender_id: Uuid,
    pub content: String,
    pub sent_at: OffsetDateTime,
}

/// Two-participant conversation.
///
/// The chat is the only writer of its `unread` map. A participant missing
/// from the map counts as zero unread; `services::chats` does the
/// increment/reset arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: Uuid,
    pub participants: [Uuid; 2],
    pub unread: HashMap<Uuid, u32>,
    pub last_message: Option<LastMessage>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Chat {
    /// Unread count for one participant; missing entries read as zero.
    pub fn unread_for(&self, participant: Uuid) -> u32 {
        self.unread.get(&participant).copied().unwrap_or(0)
    }

    /// The other side of the conversation, if `participant` is in it.
    pub fn peer_of(&self, participant: Uuid) -> Option<Uuid> {
        if self.participants[0] == participant {
            Some(self.participants[1])
        } else if self.participants[1] == participant {
            Some(self.participants[0])
        } else {
            None
        }
    }
}

/// Input for creating a chat. Both unread counters start at zero.
#[derive(Debug, Clone)]
pub struct ChatCreate {
    pub participants: [Uuid; 2],
}

/// Partial update for a chat. `None` leaves a field unchanged; the
/// last-message metadata is only ever advanced, never cleared.
#[derive(Debug, Clone, Default)]
pub struct ChatUpdate {
    pub unread: Option<HashMap<Uuid, u32>>,
    pub last_message: Option<LastMessage>,
}

/// One unit of chat content. Immutable once created except the read flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub read: bool,
    pub created_at: OffsetDateTime,
}

/// Input for appending a message to a chat. Messages start unread.
#[derive(Debug, Clone)]
pub struct MessageCreate {
    pub chat_id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
}
