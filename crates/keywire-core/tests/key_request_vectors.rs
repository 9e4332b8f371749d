//! Key request vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use keywire_core::events::event_type::EventType;
use keywire_core::events::key_request::{KeyRequest, RequestAction};
use keywire_core::events::megolm::MEGOLM_V1;

use vector_loader::load;

#[test]
fn key_request_vectors() {
    let files = [
        "key_request_request.json",
        "key_request_cancellation.json",
        "key_request_unknown_action.json",
        "key_request_no_action.json",
    ];

    for f in files {
        let v = load(f);
        // Key request decoding is total; no vector may fail.
        let req = KeyRequest::decode(&v.payload).expect("decode must not fail");
        let ex = v.expect.expect("missing expect block");
        assert_eq!(req.encode(), ex, "vector={}", v.description);
    }
}

#[test]
fn action_mapping_total() {
    let cases = [
        (json!({ "action": "request" }), RequestAction::Request),
        (
            json!({ "action": "request_cancellation" }),
            RequestAction::Cancellation,
        ),
        (json!({ "action": "bogus" }), RequestAction::Unknown),
        (json!({ "action": 7 }), RequestAction::Unknown),
        (json!({}), RequestAction::Unknown),
    ];

    for (payload, expected) in cases {
        let req = KeyRequest::decode(&payload).unwrap();
        assert_eq!(req.action, expected, "payload={payload}");
    }
}

#[test]
fn unknown_action_is_omitted_on_encode() {
    let req = KeyRequest {
        action: RequestAction::Unknown,
        sender: "@alice:example.org".to_owned(),
        ..KeyRequest::default()
    };

    let encoded = req.encode();
    assert!(encoded.get("action").is_none());
    assert!(encoded.get("type").is_none());
    assert_eq!(encoded["sender"], "@alice:example.org");
}

#[test]
fn key_request_round_trip() {
    let req = KeyRequest {
        action: RequestAction::Request,
        algorithm: MEGOLM_V1.to_owned(),
        room_id: "!room:example.org".to_owned(),
        sender_key: "KyuqTJZZfjkaPu0Ki1fZnY0ZR2C0J15xUogkeHrDXh0".to_owned(),
        session_id: "X3lUlvLELLYxeTx4yOVu6UDpasGEVO0Jbu+QFnm0cKQ".to_owned(),
        request_id: "m1529936829480.0".to_owned(),
        requesting_device_id: "GUIDEDDEVICE".to_owned(),
        sender: "@alice:example.org".to_owned(),
        event_type: EventType::RoomKeyRequest,
    };

    assert_eq!(KeyRequest::decode(&req.encode()).unwrap(), req);
}
