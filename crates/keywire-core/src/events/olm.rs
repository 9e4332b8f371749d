//! Olm (one-to-one) encrypted payloads.
//!
//! An Olm event addresses each recipient device individually: the
//! `ciphertext` object maps recipient curve25519 identities to independent
//! ciphertext blobs. The per-blob `type` discriminator tells the Olm layer
//! whether to treat the message as pre-key (session-establishing) or normal.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::error::{KeywireError, Result};
use crate::events::{string_field, u8_field_required};

/// Wire identifier for the Olm v1 algorithm.
pub const OLM_V1: &str = "m.olm.v1.curve25519-aes-sha2";

/// Olm pre-key message, sent while the session is being established.
pub const OLM_MESSAGE_TYPE_PRE_KEY: u8 = 0;
/// Normal Olm message on an established session.
pub const OLM_MESSAGE_TYPE_NORMAL: u8 = 1;

/// A single Olm ciphertext blob addressed to one device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OlmCipherContent {
    /// The ciphertext (opaque to this codec).
    pub body: String,
    /// Olm message type: 0 = pre-key, 1 = normal (wire field `type`).
    pub message_type: u8,
}

impl OlmCipherContent {
    /// Decode from a JSON object.
    ///
    /// `type` is the discriminator the Olm layer needs to pick pre-key vs
    /// normal handling, so its absence is an error rather than a default.
    pub fn decode(value: &Value) -> Result<Self> {
        Ok(Self {
            body: string_field(value, "body")?,
            message_type: u8_field_required(value, "type")?,
        })
    }

    /// Encode to a JSON object.
    pub fn encode(&self) -> Value {
        json!({
            "body": self.body,
            "type": self.message_type,
        })
    }
}

/// Content of an Olm-encrypted event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OlmEncrypted {
    /// Encryption algorithm, normally [`OLM_V1`].
    pub algorithm: String,
    /// Sender's curve25519 device key.
    pub sender_key: String,
    /// One ciphertext blob per recipient device, keyed by the recipient's
    /// curve25519 identity.
    pub ciphertext: BTreeMap<String, OlmCipherContent>,
}

impl OlmEncrypted {
    /// Decode from a JSON object.
    pub fn decode(value: &Value) -> Result<Self> {
        let mut ciphertext = BTreeMap::new();
        // An absent or non-object `ciphertext` means zero recipients, not an
        // error; an entry of the wrong kind is malformed.
        if let Some(Value::Object(entries)) = value.get("ciphertext") {
            for (recipient, entry) in entries {
                if !entry.is_object() {
                    return Err(KeywireError::MalformedValue {
                        field: "ciphertext",
                        expected: "object per recipient",
                    });
                }
                ciphertext.insert(recipient.clone(), OlmCipherContent::decode(entry)?);
            }
        }

        Ok(Self {
            algorithm: string_field(value, "algorithm")?,
            sender_key: string_field(value, "sender_key")?,
            ciphertext,
        })
    }

    /// Encode to a JSON object.
    pub fn encode(&self) -> Value {
        let entries: Map<String, Value> = self
            .ciphertext
            .iter()
            .map(|(recipient, blob)| (recipient.clone(), blob.encode()))
            .collect();

        json!({
            "algorithm": self.algorithm,
            "sender_key": self.sender_key,
            "ciphertext": entries,
        })
    }
}
