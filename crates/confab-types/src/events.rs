use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// The kind of change a live query reports for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

/// A persisted document as the store delivers it: a server-assigned identity
/// plus a schemaless field map. The codec turns this into a typed `Message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: Uuid,
    pub fields: Map<String, Value>,
}

/// One document-level change notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub doc: RawDocument,
}

/// Everything one server push delivered for a subscription.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedBatch {
    pub changes: Vec<ChangeRecord>,
}

impl FeedBatch {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
