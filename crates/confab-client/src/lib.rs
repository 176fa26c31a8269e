//! Client-side transcript synchronization for two-party conversations.
//!
//! A conversation is backed by two independent live queries against a remote
//! document store, one per message direction. This crate merges those two
//! unordered change streams into a single ordered, duplicate-free transcript
//! and tells the view layer, after every update, whether to redraw or append.

pub mod client;
pub mod codec;
pub mod directory;
pub mod error;
pub mod feed;
pub mod reconcile;
pub mod send;
pub mod session;
pub mod subscription;
pub mod transcript;

pub use client::ChatClient;
pub use error::{DecodeError, DirectoryError, FeedError, SendError};
pub use feed::{FeedSubscription, MessageFilter, MessageStore};
pub use reconcile::{RenderAction, RenderUpdate, reconcile};
pub use subscription::{ConversationHandle, ViewEvent};
pub use transcript::{InsertResult, Transcript};
