//! Megolm and room key payload vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde_json::Value;

use keywire_core::events::megolm::{Encrypted, MEGOLM_V1};
use keywire_core::events::room_key::RoomKey;

fn load(name: &str) -> Value {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn parse_megolm_full() {
    let event = Encrypted::decode(&load("megolm_full.json")).unwrap();
    assert_eq!(event.algorithm, MEGOLM_V1);
    assert_eq!(event.device_id, "RJYKSTBOIE");
    assert_eq!(
        event.session_id,
        "X3lUlvLELLYxeTx4yOVu6UDpasGEVO0Jbu+QFnm0cKQ"
    );
    assert!(!event.ciphertext.is_empty());
}

#[test]
fn parse_megolm_partial() {
    // Only the fields the algorithm needs are populated; the rest default.
    let event = Encrypted::decode(&load("megolm_partial.json")).unwrap();
    assert_eq!(event.device_id, "");
    assert_eq!(event.sender_key, "");
    assert_eq!(event.session_id, "");

    // Encode still emits every field for wire uniformity.
    let encoded = event.encode();
    assert_eq!(encoded["device_id"], "");
    assert_eq!(encoded["session_id"], "");
}

#[test]
fn megolm_round_trip() {
    let event = Encrypted {
        algorithm: MEGOLM_V1.to_owned(),
        ciphertext: "AwgAEnACgAkLmt6qF84IK++J7UDH2Za1YVchHyprqTqsg".to_owned(),
        device_id: "RJYKSTBOIE".to_owned(),
        sender_key: "IlRMeOPX2e0MurIyfWEucYBRVOEEUMrOHqn/8mLqMjA".to_owned(),
        session_id: "X3lUlvLELLYxeTx4yOVu6UDpasGEVO0Jbu+QFnm0cKQ".to_owned(),
    };
    assert_eq!(Encrypted::decode(&event.encode()).unwrap(), event);
}

#[test]
fn parse_room_key() {
    let key = RoomKey::decode(&load("room_key.json")).unwrap();
    assert_eq!(key.algorithm, MEGOLM_V1);
    assert_eq!(key.room_id, "!room:example.org");
    assert_eq!(key.session_id, "X3lUlvLELLYxeTx4yOVu6UDpasGEVO0Jbu+QFnm0cKQ");
    assert!(!key.session_key.is_empty());
}

#[test]
fn room_key_defaults_and_round_trip() {
    let key = RoomKey::decode(&serde_json::json!({})).unwrap();
    assert_eq!(key, RoomKey::default());

    let key = RoomKey {
        algorithm: MEGOLM_V1.to_owned(),
        room_id: "!room:example.org".to_owned(),
        session_id: "X3lUlvLELLYxeTx4yOVu6UDpasGEVO0Jbu+QFnm0cKQ".to_owned(),
        session_key: "AgAAAADxKHa9uFxcXzwYoNueL5Xqi69IkD4sni8Llfq5".to_owned(),
    };
    assert_eq!(RoomKey::decode(&key.encode()).unwrap(), key);
}
