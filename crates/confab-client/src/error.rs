use thiserror::Error;

/// A persisted record could not be turned into a `Message`.
///
/// The offending record is skipped; the rest of its batch still applies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` has the wrong shape: {reason}")]
    BadField {
        field: &'static str,
        reason: String,
    },
}

/// A subscription delivered an error instead of a batch.
///
/// The batch is dropped wholesale and the transcript stays untouched; the
/// subscription remains open for future batches.
#[derive(Debug, Clone, Error)]
#[error("feed error: {message}")]
pub struct FeedError {
    pub message: String,
}

impl FeedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// The write path failed. No retry is attempted; the message is lost for
/// this attempt and the caller surfaces a notification only.
#[derive(Debug, Clone, Error)]
pub enum SendError {
    #[error("remote store rejected the write: {0}")]
    Rejected(String),
    #[error("remote store unreachable: {0}")]
    Unreachable(String),
}

/// Directory query failures.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Nobody to talk to: the query returned no users besides the local one.
    #[error("no users available")]
    NoUsers,
    #[error("directory query failed: {0}")]
    Query(String),
}
