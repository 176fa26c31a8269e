//! Outgoing writes. Fire-and-forget with respect to the transcript: a sent
//! message only becomes visible once it round-trips through one of the live
//! subscriptions, which keeps the feed the single source of truth.

use tracing::warn;
use uuid::Uuid;

use confab_types::api::OutgoingMessage;

use crate::error::SendError;
use crate::feed::MessageStore;

/// Submit one message for durable storage. The store assigns `sent_at` and
/// the document identity; nothing is inserted locally.
///
/// Callers typically clear the input field before awaiting the result — a
/// failure surfaces as a notification only and does not restore the text.
pub async fn send<S: MessageStore>(
    store: &S,
    local_id: Uuid,
    remote_id: Uuid,
    text: String,
) -> Result<(), SendError> {
    let outgoing = OutgoingMessage {
        sender_id: local_id,
        receiver_id: remote_id,
        text,
    };
    if let Err(err) = store.append(outgoing).await {
        warn!(%err, %remote_id, "message write failed, not retrying");
        return Err(err);
    }
    Ok(())
}
