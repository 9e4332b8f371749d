//! Encryption event payload codecs.
//!
//! Each module hosts one wire contract:
//! - `olm`: per-recipient Olm ciphertext (`m.room.encrypted`, Olm variant).
//! - `megolm`: group-session ciphertext (`m.room.encrypted`, Megolm variant).
//! - `room_key`: session-key distribution (`m.room_key`).
//! - `key_request`: session-key requests and cancellations
//!   (`m.room_key_request`).
//! - `verification`: interactive device-verification requests
//!   (`m.key.verification.request`).
//! - `event_type`: the envelope's event-type tag mapping consumed by the
//!   payloads that carry it.
//!
//! Every codec is a pair of pure functions, `decode(&Value) -> Result<T>`
//! and `encode(&T) -> Value`, with no shared state. All decoders are
//! panic-free: malformed input is reported as `KeywireError` instead of
//! panicking, keeping event pipelines resilient to hostile payloads.

pub mod event_type;
pub mod key_request;
pub mod megolm;
pub mod olm;
pub mod room_key;
pub mod verification;

use serde_json::Value;

use crate::error::{KeywireError, Result};

/// Read an optional text field. Absent (or null) degrades to an empty
/// string for forward/backward protocol compatibility; a present value of
/// the wrong kind is an error.
pub(crate) fn string_field(obj: &Value, field: &'static str) -> Result<String> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(KeywireError::MalformedValue {
            field,
            expected: "string",
        }),
    }
}

/// Read a required small unsigned integer field.
pub(crate) fn u8_field_required(obj: &Value, field: &'static str) -> Result<u8> {
    let value = match obj.get(field) {
        None | Some(Value::Null) => return Err(KeywireError::FieldMissing(field)),
        Some(v) => v,
    };
    value
        .as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or(KeywireError::MalformedValue {
            field,
            expected: "unsigned integer",
        })
}

/// Read an optional 64-bit unsigned integer field, defaulting to 0.
pub(crate) fn u64_field(obj: &Value, field: &'static str) -> Result<u64> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(0),
        Some(v) => v.as_u64().ok_or(KeywireError::MalformedValue {
            field,
            expected: "unsigned integer",
        }),
    }
}

/// Read an optional array-of-text field, preserving element order. Absent
/// degrades to an empty vector.
pub(crate) fn string_array_field(obj: &Value, field: &'static str) -> Result<Vec<String>> {
    let items = match obj.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(KeywireError::MalformedValue {
                field,
                expected: "array of strings",
            })
        }
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(KeywireError::MalformedValue {
                field,
                expected: "array of strings",
            }),
        })
        .collect()
}
