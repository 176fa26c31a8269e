use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Write-path request. The store assigns `sent_at` and the document identity
/// at write time, so the outgoing record carries neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub text: String,
}
