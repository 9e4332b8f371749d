//! Megolm (group session) encrypted payload.

use serde_json::{json, Value};

use crate::error::Result;
use crate::events::string_field;

/// Wire identifier for the Megolm v1 algorithm.
pub const MEGOLM_V1: &str = "m.megolm.v1.aes-sha2";

/// Content of a group-encrypted room event.
///
/// Which fields are populated depends on the algorithm, so every field is
/// optional at decode and degrades to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encrypted {
    /// Encryption algorithm, normally [`MEGOLM_V1`].
    pub algorithm: String,
    /// The actual encrypted payload.
    pub ciphertext: String,
    /// Sender's device id.
    pub device_id: String,
    /// Sender's curve25519 device key.
    pub sender_key: String,
    /// Outbound group session id.
    pub session_id: String,
}

impl Encrypted {
    /// Decode from a JSON object.
    pub fn decode(value: &Value) -> Result<Self> {
        Ok(Self {
            algorithm: string_field(value, "algorithm")?,
            ciphertext: string_field(value, "ciphertext")?,
            device_id: string_field(value, "device_id")?,
            sender_key: string_field(value, "sender_key")?,
            session_id: string_field(value, "session_id")?,
        })
    }

    /// Encode to a JSON object. All fields are emitted, empty or not, for
    /// wire uniformity.
    pub fn encode(&self) -> Value {
        json!({
            "algorithm": self.algorithm,
            "ciphertext": self.ciphertext,
            "device_id": self.device_id,
            "sender_key": self.sender_key,
            "session_id": self.session_id,
        })
    }
}
