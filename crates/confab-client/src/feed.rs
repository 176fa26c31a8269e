//! Boundary to the remote document store.
//!
//! The engine never talks to the network itself; the caller implements
//! [`MessageStore`] against their backend and the engine consumes its event
//! shape.

use std::future::Future;

use tokio::sync::mpsc;
use uuid::Uuid;

use confab_types::api::OutgoingMessage;
use confab_types::events::FeedBatch;

use crate::error::{FeedError, SendError};

/// Equality predicate pair for one directional live query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFilter {
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
}

impl MessageFilter {
    /// The two complementary filters covering a conversation between
    /// `local_id` and `remote_id`. Mutually exclusive by direction, so no
    /// record can match both.
    pub fn pair(local_id: Uuid, remote_id: Uuid) -> (Self, Self) {
        (
            Self { sender_id: local_id, receiver_id: remote_id },
            Self { sender_id: remote_id, receiver_id: local_id },
        )
    }

    pub fn matches(&self, sender_id: Uuid, receiver_id: Uuid) -> bool {
        self.sender_id == sender_id && self.receiver_id == receiver_id
    }
}

/// One live subscription. Each delivery is either a batch of change records
/// or a feed-level error; within one subscription, deliveries arrive in
/// server-push order. Dropping the subscription unsubscribes — the store
/// side observes its channel closing.
pub struct FeedSubscription {
    deliveries: mpsc::UnboundedReceiver<Result<FeedBatch, FeedError>>,
}

impl FeedSubscription {
    pub fn new(deliveries: mpsc::UnboundedReceiver<Result<FeedBatch, FeedError>>) -> Self {
        Self { deliveries }
    }

    /// Next delivery, or `None` when the store ended the subscription.
    pub(crate) async fn recv(&mut self) -> Option<Result<FeedBatch, FeedError>> {
        self.deliveries.recv().await
    }
}

/// The remote document store as this client sees it: a filterable live
/// change feed plus a durable write path.
pub trait MessageStore: Send + Sync + 'static {
    /// Open a live query matching `filter`. Delivery starts with the
    /// documents currently matching (as `Added` records) and continues with
    /// every later change, in server-push order.
    fn subscribe(&self, filter: MessageFilter) -> impl Future<Output = FeedSubscription> + Send;

    /// Durably append one outgoing message. The store assigns `sent_at` and
    /// the document identity at write time.
    fn append(&self, message: OutgoingMessage) -> impl Future<Output = Result<(), SendError>> + Send;
}
