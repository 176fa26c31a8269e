//! Conversation lifecycle: the directional subscription pair and the merge
//! pump that funnels both feeds into one ordered transcript.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use confab_types::events::{ChangeKind, FeedBatch};
use confab_types::models::Message;

use crate::codec;
use crate::error::FeedError;
use crate::feed::{FeedSubscription, MessageFilter, MessageStore};
use crate::reconcile::{RenderUpdate, reconcile};
use crate::transcript::{InsertResult, Transcript};

/// What the engine reports to the view layer.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// The transcript changed; apply this update to the message list.
    Render(RenderUpdate),
    /// A subscription delivered an error. The batch was dropped, the
    /// transcript is unchanged, and the subscription stays open.
    FeedError(FeedError),
}

/// An open conversation: the transcript plus the live subscription pair.
///
/// Dropping the handle closes the conversation.
pub struct ConversationHandle {
    transcript: Transcript,
    events: mpsc::UnboundedReceiver<ViewEvent>,
    closed: Arc<AtomicBool>,
    pump: JoinHandle<()>,
    local_id: Uuid,
    remote_id: Uuid,
}

impl ConversationHandle {
    /// Open both directional subscriptions for the pair `{local_id,
    /// remote_id}` and start the merge pump.
    pub async fn open<S: MessageStore>(store: &S, local_id: Uuid, remote_id: Uuid) -> Self {
        let (outbound_filter, inbound_filter) = MessageFilter::pair(local_id, remote_id);
        let outbound = store.subscribe(outbound_filter).await;
        let inbound = store.subscribe(inbound_filter).await;

        let transcript = Transcript::new();
        let closed = Arc::new(AtomicBool::new(false));
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let pump = tokio::spawn(pump_loop(
            outbound,
            inbound,
            transcript.clone(),
            closed.clone(),
            events_tx,
        ));

        info!(%local_id, %remote_id, "conversation opened");
        Self {
            transcript,
            events: events_rx,
            closed,
            pump,
            local_id,
            remote_id,
        }
    }

    /// Ordered copy of the conversation so far.
    pub fn snapshot(&self) -> Vec<Message> {
        self.transcript.snapshot()
    }

    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    pub fn local_id(&self) -> Uuid {
        self.local_id
    }

    pub fn remote_id(&self) -> Uuid {
        self.remote_id
    }

    /// Next view instruction. `None` once the conversation is closed and
    /// already-queued events are drained.
    pub async fn next_event(&mut self) -> Option<ViewEvent> {
        self.events.recv().await
    }

    /// Non-blocking variant of [`next_event`](Self::next_event).
    pub fn try_next_event(&mut self) -> Option<ViewEvent> {
        self.events.try_recv().ok()
    }

    /// Unsubscribe both feeds. The transcript stops changing immediately;
    /// a delivery racing the close is discarded as a no-op.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.transcript.seal();
        self.pump.abort();
        info!(local_id = %self.local_id, remote_id = %self.remote_id, "conversation closed");
    }
}

impl Drop for ConversationHandle {
    fn drop(&mut self) {
        self.close();
    }
}

/// The single synchronization task: both subscriptions' deliveries funnel
/// through this loop, so batch application is serialized. Either channel
/// closing ends the loop — a conversation is live only while both
/// subscriptions are.
async fn pump_loop(
    mut outbound: FeedSubscription,
    mut inbound: FeedSubscription,
    transcript: Transcript,
    closed: Arc<AtomicBool>,
    events: mpsc::UnboundedSender<ViewEvent>,
) {
    loop {
        let delivery = tokio::select! {
            d = outbound.recv() => d,
            d = inbound.recv() => d,
        };
        let Some(delivery) = delivery else { break };
        if closed.load(Ordering::Acquire) {
            break;
        }
        match delivery {
            Err(err) => {
                warn!(%err, "feed delivered an error, dropping batch");
                let _ = events.send(ViewEvent::FeedError(err));
            }
            Ok(batch) => {
                if let Some(update) = apply_batch(&transcript, &batch) {
                    let _ = events.send(ViewEvent::Render(update));
                }
            }
        }
    }
}

/// Apply one batch: decode and insert every `Added` record, then compute the
/// render delta from the counts before and after. Returns `None` when
/// nothing was inserted.
fn apply_batch(transcript: &Transcript, batch: &FeedBatch) -> Option<RenderUpdate> {
    let mut first: Option<InsertResult> = None;
    let mut last: Option<InsertResult> = None;
    let mut all_at_tail = true;

    for change in &batch.changes {
        if change.kind != ChangeKind::Added {
            // Messages are append-only; edits and deletes never occur.
            continue;
        }
        let message = match codec::decode(&change.doc) {
            Ok(message) => message,
            Err(err) => {
                warn!(doc_id = %change.doc.id, %err, "skipping undecodable record");
                continue;
            }
        };
        let Some(result) = transcript.insert(change.doc.id, message) else {
            // Sealed mid-batch: the conversation closed, discard the rest.
            return None;
        };
        all_at_tail &= result.at_tail();
        first.get_or_insert(result);
        last = Some(result);
    }

    let (first, last) = (first?, last?);
    debug!(
        inserted = last.new_count - first.prior_count,
        total = last.new_count,
        "batch applied"
    );

    if first.prior_count > 0 && !all_at_tail {
        // Clock skew or backfill put a message before the current tail; an
        // append at the end would misrender, so redraw the whole list.
        return Some(RenderUpdate::full_reset());
    }
    Some(reconcile(first.prior_count, last.new_count))
}
