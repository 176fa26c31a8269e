//! The authoritative in-memory transcript for one open conversation.
//!
//! Populated exclusively by feed events and discarded when the view closes;
//! the remote feed is the source of truth on every reopen.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use confab_types::models::Message;

/// Result of one insert, consumed by the view reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertResult {
    /// How many messages existed before this insert.
    pub prior_count: usize,
    /// How many exist now.
    pub new_count: usize,
    /// The ordered position the message landed at.
    pub index: usize,
}

impl InsertResult {
    /// Whether the message landed at the tail of the transcript. A non-tail
    /// landing means the append/scroll heuristic would misrender.
    pub fn at_tail(&self) -> bool {
        self.index + 1 == self.new_count
    }
}

struct Entry {
    /// Server-assigned document identity. Not part of the visible message,
    /// but no two entries may ever share it.
    doc_id: Uuid,
    message: Message,
}

struct Buffer {
    entries: Vec<Entry>,
    sealed: bool,
}

/// Ordered collection of messages, non-decreasing by `sent_at`, ties stable.
///
/// Clones share the same buffer. The pump task is the only writer, but
/// snapshots may be taken from any task, so every operation goes through the
/// internal lock.
#[derive(Clone)]
pub struct Transcript {
    inner: Arc<Mutex<Buffer>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Buffer {
                entries: Vec::new(),
                sealed: false,
            })),
        }
    }

    /// Insert one message at its ordered position (binary search on
    /// `sent_at`). A message that ties an existing timestamp lands after the
    /// entries it ties with, preserving arrival order.
    ///
    /// Returns `None` once the transcript is sealed: a delivery that races
    /// the conversation closing is discarded as a no-op.
    pub fn insert(&self, doc_id: Uuid, message: Message) -> Option<InsertResult> {
        let mut buffer = self.inner.lock().expect("transcript lock poisoned");
        if buffer.sealed {
            return None;
        }
        let prior_count = buffer.entries.len();
        let index = buffer
            .entries
            .partition_point(|e| e.message.sent_at <= message.sent_at);
        buffer.entries.insert(index, Entry { doc_id, message });
        Some(InsertResult {
            prior_count,
            new_count: buffer.entries.len(),
            index,
        })
    }

    /// Copy of the current ordered message sequence.
    pub fn snapshot(&self) -> Vec<Message> {
        let buffer = self.inner.lock().expect("transcript lock poisoned");
        buffer.entries.iter().map(|e| e.message.clone()).collect()
    }

    /// Document identities in transcript order.
    pub fn document_ids(&self) -> Vec<Uuid> {
        let buffer = self.inner.lock().expect("transcript lock poisoned");
        buffer.entries.iter().map(|e| e.doc_id).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("transcript lock poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Permanently stop accepting inserts. Called when the conversation
    /// closes so an in-flight delivery cannot mutate the store afterwards.
    pub fn seal(&self) {
        self.inner.lock().expect("transcript lock poisoned").sealed = true;
    }
}
