//! Interactive device-verification request payload.
//!
//! Start/accept/cancel messages of the verification sub-protocol are not
//! handled yet; only the initial request is.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::events::event_type::EventType;
use crate::events::{string_array_field, string_field, u64_field};

/// Content of a `m.key.verification.request` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyVerificationRequest {
    /// The device id initiating the request.
    pub from_device: String,
    /// Opaque identifier for the verification flow, unique with respect to
    /// the devices involved.
    pub transaction_id: String,
    /// Verification methods supported by the sender, in sender order.
    pub methods: Vec<String>,
    /// POSIX milliseconds when the request was made; 0 means no timestamp
    /// was supplied. Receivers apply the freshness window (ignore requests
    /// more than 5 minutes ahead or 10 minutes behind), not this codec.
    pub timestamp: u64,
    /// Envelope event type, mapped through [`EventType`].
    pub event_type: EventType,
}

impl KeyVerificationRequest {
    /// Decode from a JSON object.
    pub fn decode(value: &Value) -> Result<Self> {
        let event_type = match value.get("type").and_then(Value::as_str) {
            Some(s) => EventType::from_wire(s),
            None => EventType::Unsupported,
        };

        Ok(Self {
            from_device: string_field(value, "from_device")?,
            transaction_id: string_field(value, "transaction_id")?,
            methods: string_array_field(value, "methods")?,
            timestamp: u64_field(value, "timestamp")?,
            event_type,
        })
    }

    /// Encode to a JSON object. `methods` keeps its input order; `type` is
    /// omitted for the Unsupported fallback.
    pub fn encode(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("from_device".into(), self.from_device.clone().into());
        obj.insert("transaction_id".into(), self.transaction_id.clone().into());
        obj.insert("methods".into(), self.methods.clone().into());
        obj.insert("timestamp".into(), self.timestamp.into());
        if let Some(event_type) = self.event_type.as_wire() {
            obj.insert("type".into(), event_type.into());
        }
        Value::Object(obj)
    }
}
