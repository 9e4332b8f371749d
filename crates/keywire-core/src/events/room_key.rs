//! Session-key distribution payload.
//!
//! Sent over an Olm-encrypted channel to hand a recipient the key material
//! needed to decrypt a chain of group-encrypted messages.

use serde_json::{json, Value};

use crate::error::Result;
use crate::events::string_field;

/// Content of a `m.room_key` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomKey {
    /// Encryption algorithm the session key is for.
    pub algorithm: String,
    /// The room the session belongs to.
    pub room_id: String,
    /// Id of the group session being shared.
    pub session_id: String,
    /// The session key itself (opaque to this codec).
    pub session_key: String,
}

impl RoomKey {
    /// Decode from a JSON object.
    pub fn decode(value: &Value) -> Result<Self> {
        Ok(Self {
            algorithm: string_field(value, "algorithm")?,
            room_id: string_field(value, "room_id")?,
            session_id: string_field(value, "session_id")?,
            session_key: string_field(value, "session_key")?,
        })
    }

    /// Encode to a JSON object.
    pub fn encode(&self) -> Value {
        json!({
            "algorithm": self.algorithm,
            "room_id": self.room_id,
            "session_id": self.session_id,
            "session_key": self.session_key,
        })
    }
}
