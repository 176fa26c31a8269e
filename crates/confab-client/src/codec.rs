//! Mapping between persisted documents and in-memory messages.
//!
//! Documents are schemaless field maps; every required field must be present
//! and well-formed or the whole record is rejected — a decode never produces
//! a partially populated `Message`.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use confab_types::api::OutgoingMessage;
use confab_types::events::RawDocument;
use confab_types::models::Message;

use crate::error::DecodeError;

pub const FIELD_SENDER_ID: &str = "sender_id";
pub const FIELD_RECEIVER_ID: &str = "receiver_id";
pub const FIELD_TEXT: &str = "text";
pub const FIELD_SENT_AT: &str = "sent_at";

/// Decode a persisted record into a `Message`.
pub fn decode(doc: &RawDocument) -> Result<Message, DecodeError> {
    Ok(Message {
        sender_id: uuid_field(&doc.fields, FIELD_SENDER_ID)?,
        receiver_id: uuid_field(&doc.fields, FIELD_RECEIVER_ID)?,
        text: string_field(&doc.fields, FIELD_TEXT)?,
        sent_at: timestamp_field(&doc.fields, FIELD_SENT_AT)?,
    })
}

/// Encode an outgoing record for the write path. `sent_at` and the document
/// id are assigned by the store at write time and are deliberately absent.
pub fn encode_outgoing(message: &OutgoingMessage) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(
        FIELD_SENDER_ID.into(),
        Value::String(message.sender_id.to_string()),
    );
    fields.insert(
        FIELD_RECEIVER_ID.into(),
        Value::String(message.receiver_id.to_string()),
    );
    fields.insert(FIELD_TEXT.into(), Value::String(message.text.clone()));
    fields
}

fn raw_field<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, DecodeError> {
    match fields.get(name) {
        None => Err(DecodeError::MissingField(name)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(DecodeError::BadField {
            field: name,
            reason: "not a string".into(),
        }),
    }
}

fn string_field(fields: &Map<String, Value>, name: &'static str) -> Result<String, DecodeError> {
    raw_field(fields, name).map(str::to_owned)
}

fn uuid_field(fields: &Map<String, Value>, name: &'static str) -> Result<Uuid, DecodeError> {
    raw_field(fields, name)?
        .parse()
        .map_err(|e: uuid::Error| DecodeError::BadField {
            field: name,
            reason: e.to_string(),
        })
}

fn timestamp_field(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<DateTime<Utc>, DecodeError> {
    let raw = raw_field(fields, name)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DecodeError::BadField {
            field: name,
            reason: e.to_string(),
        })
}
