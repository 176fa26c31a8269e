use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, as returned by the directory query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
}

/// A single chat message as held in memory.
///
/// Immutable after construction — the transcript only changes which messages
/// are present, never their contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub text: String,
    /// Server-assigned timestamp, the authoritative ordering key.
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// The unordered participant pair this message belongs to.
    pub fn conversation_key(&self) -> ConversationKey {
        ConversationKey::new(self.sender_id, self.receiver_id)
    }

    /// Which bubble style the view renders this message with.
    pub fn direction(&self, local_id: Uuid) -> Direction {
        if self.sender_id == local_id {
            Direction::Sent
        } else {
            Direction::Received
        }
    }

    /// Human-readable timestamp, e.g. "Aug 08, 2026 - 03:15 PM".
    pub fn sent_at_display(&self) -> String {
        self.sent_at.format("%b %d, %Y - %I:%M %p").to_string()
    }
}

/// Whether a message was authored locally or by the other participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Sent,
    Received,
}

/// Unordered pair of participant ids. Two messages belong to the same
/// conversation iff their keys are equal, regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationKey {
    a: Uuid,
    b: Uuid,
}

impl ConversationKey {
    /// Builds the key with the pair normalized, so `{x, y}` and `{y, x}`
    /// compare equal.
    pub fn new(x: Uuid, y: Uuid) -> Self {
        if x <= y { Self { a: x, b: y } } else { Self { a: y, b: x } }
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.a == id || self.b == id
    }

    pub fn participants(&self) -> (Uuid, Uuid) {
        (self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_key_ignores_direction() {
        let x = Uuid::new_v4();
        let y = Uuid::new_v4();
        assert_eq!(ConversationKey::new(x, y), ConversationKey::new(y, x));
        assert!(ConversationKey::new(x, y).contains(x));
        assert!(!ConversationKey::new(x, y).contains(Uuid::new_v4()));
    }

    #[test]
    fn direction_follows_sender() {
        let local = Uuid::new_v4();
        let remote = Uuid::new_v4();
        let msg = Message {
            sender_id: local,
            receiver_id: remote,
            text: "hi".into(),
            sent_at: Utc::now(),
        };
        assert_eq!(msg.direction(local), Direction::Sent);
        assert_eq!(msg.direction(remote), Direction::Received);
    }
}
