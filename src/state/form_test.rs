use super::*;

#[test]
fn default_model_is_qwen_7b() {
    let form = FormState::default();
    assert_eq!(form.model, "qwen2.5:7b");
    assert_eq!(model_label(&form.model), "Qwen 2.5 7B (Default)");
    assert!(!form.has_schema());
}

#[test]
fn unknown_model_labels_as_its_id() {
    assert_eq!(model_label("llama3:8b"), "llama3:8b");
    assert_eq!(model_label("gpt-oss:20b"), "GPT-OSS 20B");
}

#[test]
fn model_ids_are_unique() {
    for (i, a) in MODELS.iter().enumerate() {
        assert!(MODELS.iter().skip(i + 1).all(|b| b.id != a.id));
    }
}

#[test]
fn take_question_clears_input() {
    let mut form = FormState::default();
    form.set_question("How many users?");
    assert_eq!(form.take_question(), "How many users?");
    assert!(form.question.is_empty());
}

#[test]
fn ask_request_reads_current_selection() {
    let mut form = FormState::with_model("qwen3:14b");
    form.set_schema("CREATE TABLE users (id int);");
    let req = form.ask_request("count users", Some("s-1".into()));
    assert_eq!(req.schema, "CREATE TABLE users (id int);");
    assert_eq!(req.model, "qwen3:14b");
    assert_eq!(req.session_id.as_deref(), Some("s-1"));
    assert!(form.has_schema());

    form.set_model("qwen3:30b");
    assert_eq!(form.ask_request("q", None).model, "qwen3:30b");
}
