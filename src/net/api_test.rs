use super::*;
use crate::net::types::{AskResponse, Conversation};
use serde_json::json;

#[test]
fn chat_paths_encode_ids() {
    assert_eq!(chat_path("65f0c1"), "/chat/65f0c1");
    assert_eq!(messages_path("65f0c1"), "/chat/65f0c1/messages");
    assert_eq!(chat_path("a b/c"), "/chat/a%20b%2Fc");
}

#[test]
fn chat_path_keeps_unreserved_and_escapes_utf8() {
    assert_eq!(chat_path("AZaz09-_.~"), "/chat/AZaz09-_.~");
    assert_eq!(chat_path("é"), "/chat/%C3%A9");
}

#[test]
fn decode_unwraps_metadata_envelope() {
    let body = r#"{"message":"ok","metadata":[{"_id":"c1","title":"Orders","schema":""}]}"#;
    let chats: Vec<Conversation> = decode_response(200, body).unwrap();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].id, "c1");
}

#[test]
fn decode_reads_bare_payloads() {
    let body = json!({"query": "SELECT 1", "explain": "trivial", "rows": [[1]], "columns": ["x"]}).to_string();
    let resp: AskResponse = decode_response(200, &body).unwrap();
    assert_eq!(resp.query, "SELECT 1");
    assert_eq!(resp.explain, "trivial");
}

#[test]
fn decode_maps_error_statuses() {
    let err = decode_response::<Value>(422, r#"{"detail":"schema required"}"#).unwrap_err();
    assert_eq!(err, ApiError::Validation { status: 422, message: "schema required".into() });

    let err = decode_response::<Value>(500, "").unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 500, .. }));
}

#[test]
fn decode_reports_shape_mismatch() {
    assert!(matches!(decode_response::<Vec<Conversation>>(200, r#"{"a":1}"#), Err(ApiError::Decode(_))));
    assert!(matches!(decode_response::<Value>(200, "<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn empty_success_body_is_null() {
    assert_eq!(decode_response::<Value>(204, "").unwrap(), Value::Null);
}

#[test]
fn requests_are_unavailable_natively() {
    let result: Result<Value, _> =
        futures::executor::block_on(request_json(Method::Get, "http://localhost/chat", None, Body::Empty));
    assert_eq!(result, Err(ApiError::Unavailable));
}
