use super::*;

#[test]
fn defaults_apply_when_unset() {
    let cfg = AppConfig::from_values(None, None, None);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.ai_url, DEFAULT_AI_URL);
    assert_eq!(cfg.default_model, "qwen2.5:7b");
    assert_eq!(AppConfig::default(), cfg);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = AppConfig::from_values(Some(""), Some("   "), Some(""));
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn trailing_slashes_are_trimmed() {
    let cfg = AppConfig::from_values(Some("https://api.example.com/v1/api/"), Some("http://ai:8000//"), Some("qwen3:14b"));
    assert_eq!(cfg.backend_url, "https://api.example.com/v1/api");
    assert_eq!(cfg.ai_url, "http://ai:8000");
    assert_eq!(cfg.default_model, "qwen3:14b");
}

#[test]
fn joins_paths_with_single_slash() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.backend("/chat"), "http://localhost:3055/v1/api/chat");
    assert_eq!(cfg.backend("auth/signIn"), "http://localhost:3055/v1/api/auth/signIn");
    assert_eq!(cfg.ai("/ask-chat"), "http://localhost:8000/ask-chat");
}
