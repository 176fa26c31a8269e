//! Top-level client: ties the signed-in session to a store handle.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::SendError;
use crate::feed::MessageStore;
use crate::send;
use crate::session::Session;
use crate::subscription::ConversationHandle;

/// A signed-in messaging client. Cheap to clone; all clones share the same
/// store handle.
pub struct ChatClient<S: MessageStore> {
    store: Arc<S>,
    session: Session,
}

impl<S: MessageStore> ChatClient<S> {
    pub fn new(store: Arc<S>, session: Session) -> Self {
        Self { store, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Open the live transcript view for a conversation with `remote_id`.
    pub async fn open_conversation(&self, remote_id: Uuid) -> ConversationHandle {
        ConversationHandle::open(self.store.as_ref(), self.session.user_id, remote_id).await
    }

    /// Send a message to `remote_id`. Fire-and-forget with respect to the
    /// transcript: the message appears only via the live feed.
    pub async fn send(&self, remote_id: Uuid, text: impl Into<String>) -> Result<(), SendError> {
        send::send(
            self.store.as_ref(),
            self.session.user_id,
            remote_id,
            text.into(),
        )
        .await
    }
}

impl<S: MessageStore> Clone for ChatClient<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            session: self.session.clone(),
        }
    }
}
