//! Session-key requests and cancellations.
//!
//! A device that is missing the key for a group session asks its peers for
//! it with a `m.room_key_request` event, and can later cancel the request.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;
use crate::events::event_type::EventType;
use crate::events::string_field;

/// Discriminator for a key request payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestAction {
    /// Wire string `request`.
    Request,
    /// Wire string `request_cancellation`.
    Cancellation,
    /// Any other wire value, or an absent field.
    #[default]
    Unknown,
}

impl RequestAction {
    /// Map a wire string to an action. Total: unrecognized strings degrade
    /// to `Unknown` so new action values do not break the whole payload.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "request" => RequestAction::Request,
            "request_cancellation" => RequestAction::Cancellation,
            other => {
                debug!(action = other, "unrecognized key request action");
                RequestAction::Unknown
            }
        }
    }

    /// Wire string for the action. `Unknown` has no canonical wire string,
    /// so encoders omit the field for it.
    pub fn as_wire(self) -> Option<&'static str> {
        match self {
            RequestAction::Request => Some("request"),
            RequestAction::Cancellation => Some("request_cancellation"),
            RequestAction::Unknown => None,
        }
    }
}

/// Content of a `m.room_key_request` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRequest {
    /// Whether keys are being requested or a request is being cancelled.
    pub action: RequestAction,
    /// Encryption algorithm of the wanted session. Always
    /// [`MEGOLM_V1`](crate::events::megolm::MEGOLM_V1) in practice.
    pub algorithm: String,
    /// The room in which the session was created.
    pub room_id: String,
    /// Curve25519 key of the session creator.
    pub sender_key: String,
    /// Id of the outbound group session.
    pub session_id: String,
    /// Unique identifier for this request.
    pub request_id: String,
    /// The device requesting the keys.
    pub requesting_device_id: String,
    /// The user that sent this event.
    pub sender: String,
    /// Envelope event type, mapped through [`EventType`].
    pub event_type: EventType,
}

impl KeyRequest {
    /// Decode from a JSON object. Neither an unrecognized `action` nor an
    /// unrecognized `type` fails the decode.
    pub fn decode(value: &Value) -> Result<Self> {
        let action = match value.get("action").and_then(Value::as_str) {
            Some(s) => RequestAction::from_wire(s),
            None => RequestAction::Unknown,
        };
        let event_type = match value.get("type").and_then(Value::as_str) {
            Some(s) => EventType::from_wire(s),
            None => EventType::Unsupported,
        };

        Ok(Self {
            action,
            algorithm: string_field(value, "algorithm")?,
            room_id: string_field(value, "room_id")?,
            sender_key: string_field(value, "sender_key")?,
            session_id: string_field(value, "session_id")?,
            request_id: string_field(value, "request_id")?,
            requesting_device_id: string_field(value, "requesting_device_id")?,
            sender: string_field(value, "sender")?,
            event_type,
        })
    }

    /// Encode to a JSON object. `action` and `type` are omitted when they
    /// hold the Unknown/Unsupported fallback, which has no wire string.
    pub fn encode(&self) -> Value {
        let mut obj = Map::new();
        if let Some(action) = self.action.as_wire() {
            obj.insert("action".into(), action.into());
        }
        obj.insert("algorithm".into(), self.algorithm.clone().into());
        obj.insert("room_id".into(), self.room_id.clone().into());
        obj.insert("sender_key".into(), self.sender_key.clone().into());
        obj.insert("session_id".into(), self.session_id.clone().into());
        obj.insert("request_id".into(), self.request_id.clone().into());
        obj.insert(
            "requesting_device_id".into(),
            self.requesting_device_id.clone().into(),
        );
        obj.insert("sender".into(), self.sender.clone().into());
        if let Some(event_type) = self.event_type.as_wire() {
            obj.insert("type".into(), event_type.into());
        }
        Value::Object(obj)
    }
}
