//! Event-type tag for the envelope discriminator.
//!
//! The envelope layer owns the full event-type universe; this module maps
//! only the types the encryption payloads ride on. Both directions are
//! total: unknown wire strings decode to `Unsupported`, and `Unsupported`
//! has no wire string, so encoders omit the field.

use tracing::debug;

/// Envelope event-type tag (stable API).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventType {
    /// `m.room.encrypted`
    RoomEncrypted,
    /// `m.room_key`
    RoomKey,
    /// `m.room_key_request`
    RoomKeyRequest,
    /// `m.key.verification.request`
    KeyVerificationRequest,
    /// Any event type this build does not know.
    #[default]
    Unsupported,
}

impl EventType {
    /// Map a wire string to a tag. Total: unknown strings degrade to
    /// `Unsupported` instead of failing the whole payload.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "m.room.encrypted" => EventType::RoomEncrypted,
            "m.room_key" => EventType::RoomKey,
            "m.room_key_request" => EventType::RoomKeyRequest,
            "m.key.verification.request" => EventType::KeyVerificationRequest,
            other => {
                debug!(event_type = other, "unrecognized event type");
                EventType::Unsupported
            }
        }
    }

    /// Wire string for the tag. `Unsupported` has none.
    pub fn as_wire(self) -> Option<&'static str> {
        match self {
            EventType::RoomEncrypted => Some("m.room.encrypted"),
            EventType::RoomKey => Some("m.room_key"),
            EventType::RoomKeyRequest => Some("m.room_key_request"),
            EventType::KeyVerificationRequest => Some("m.key.verification.request"),
            EventType::Unsupported => None,
        }
    }
}
