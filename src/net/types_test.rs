use super::*;
use serde_json::json;

#[test]
fn user_accepts_mongo_or_plain_id() {
    let a: User = serde_json::from_value(json!({"_id": "u1", "username": "ann", "email": "a@x.io"})).unwrap();
    let b: User = serde_json::from_value(json!({"id": "u1", "username": "ann", "email": "a@x.io"})).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.display_name(), "ann");
}

#[test]
fn user_display_name_falls_back_to_email() {
    let user = User { email: "a@x.io".into(), ..User::default() };
    assert_eq!(user.display_name(), "a@x.io");
}

#[test]
fn sign_in_response_uses_camel_case_tokens() {
    let resp: SignInResponse = serde_json::from_value(json!({
        "user": {"_id": "u1", "email": "a@x.io"},
        "accessToken": "at",
        "refreshToken": "rt"
    }))
    .unwrap();
    assert_eq!(resp.access_token, "at");
    assert_eq!(resp.refresh_token, "rt");
    assert_eq!(resp.user.id, "u1");
}

#[test]
fn sign_up_request_serializes_confirm_password() {
    let req = SignUpRequest {
        username: "ann".into(),
        email: "a@x.io".into(),
        password: "pw".into(),
        confirm_password: "pw".into(),
        gender: "female".into(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["confirmPassword"], "pw");
    assert!(value.get("confirm_password").is_none());
}

#[test]
fn wire_message_response_data_becomes_result_set() {
    let msg: WireMessage = serde_json::from_value(json!({
        "chatId": "c1",
        "type": "response",
        "body": "SELECT 1trivial",
        "data": {"rows": [[1]], "columns": ["x"]},
        "createdAt": "2024-01-01T00:00:00.000Z"
    }))
    .unwrap();
    let data = msg.data.unwrap();
    assert_eq!(data.columns, vec!["x".to_owned()]);
    assert_eq!(data.rows, vec![vec![Scalar::Int(1)]]);
}

#[test]
fn wire_message_empty_or_null_data_is_none() {
    for data in [json!({}), json!(null), json!("x"), json!({"rows": null})] {
        let msg: WireMessage =
            serde_json::from_value(json!({"chatId": "c1", "type": "question", "body": "hi", "data": data})).unwrap();
        assert_eq!(msg.data, None);
    }
    let bare: WireMessage = serde_json::from_value(json!({"type": "question"})).unwrap();
    assert_eq!(bare.data, None);
    assert_eq!(bare.body, "");
}

#[test]
fn thread_page_reads_recommends_from_chat() {
    let page: ThreadPage = serde_json::from_value(json!({
        "chat": {"recommends": ["How many orders?", "Top customers"]},
        "messages": []
    }))
    .unwrap();
    assert_eq!(page.recommends(), vec!["How many orders?".to_owned(), "Top customers".to_owned()]);
    assert!(ThreadPage::default().recommends().is_empty());
}

#[test]
fn recommends_accept_objects_and_encoded_arrays() {
    assert_eq!(parse_recommends(&json!([{"question": "a"}, {"text": "b"}, 3])), vec!["a", "b"]);
    assert_eq!(parse_recommends(&json!("```json\n[\"a\", \"b\"]\n```")), vec!["a", "b"]);
    assert_eq!(parse_recommends(&json!("- first\n- second\n\n")), vec!["first", "second"]);
    assert!(parse_recommends(&json!(null)).is_empty());
}

#[test]
fn envelope_is_unwrapped_only_when_present() {
    assert_eq!(unwrap_envelope(json!({"metadata": [1, 2]})), json!([1, 2]));
    assert_eq!(unwrap_envelope(json!({"metadata": null, "a": 1})), json!({"metadata": null, "a": 1}));
    assert_eq!(unwrap_envelope(json!([{"_id": "c1"}])), json!([{"_id": "c1"}]));
}

#[test]
fn ask_fields_include_session_only_when_known() {
    let mut req = AskRequest {
        question: "How many users?".into(),
        schema: String::new(),
        model: "qwen2.5:7b".into(),
        session_id: None,
    };
    let names: Vec<_> = req.fields().iter().map(|(k, _)| *k).collect();
    assert_eq!(names, vec!["question", "schema", "model"]);

    req.session_id = Some("s-1".into());
    assert_eq!(req.fields().last(), Some(&("session_id", "s-1")));
}

#[test]
fn ask_response_result_set() {
    let resp: AskResponse = serde_json::from_value(json!({
        "query": "SELECT 1",
        "explain": "trivial",
        "rows": [[1]],
        "columns": ["x"]
    }))
    .unwrap();
    assert_eq!(resp.result(), Some(ResultSet::new(vec!["x".into()], vec![vec![Scalar::Int(1)]])));
    assert_eq!(resp.session_id, None);

    let no_rows: AskResponse = serde_json::from_value(json!({"query": "DROP", "explain": "no"})).unwrap();
    assert_eq!(no_rows.result(), None);
}

#[test]
fn discovered_database_labels() {
    let db: DiscoveredDatabase = serde_json::from_value(json!({"type": "postgresql", "database": "shop"})).unwrap();
    assert_eq!(db.display_name(), "shop");
    assert_eq!(db.icon(), "🐘");
    assert_eq!(DiscoveredDatabase::default().display_name(), "Unknown");
    assert_eq!(DiscoveredDatabase::default().icon(), "🗄️");
}

#[test]
fn chat_init_tolerates_missing_fields() {
    let init: ChatInit = serde_json::from_value(json!({"introduction": "Hi"})).unwrap();
    assert_eq!(init.introduction, "Hi");
    assert!(init.recommends.is_empty());
    assert!(init.discovered_databases.is_empty());
}
