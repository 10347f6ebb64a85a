//! Endpoint configuration resolved at build time.
//!
//! The WASM bundle has no process environment at runtime, so endpoints are
//! baked in from build-time variables:
//!
//! - `SQLCHAT_BACKEND_URL`: auth + chat history API (default `http://localhost:3055/v1/api`)
//! - `SQLCHAT_AI_URL`: SQL generation service (default `http://localhost:8000`)
//! - `SQLCHAT_DEFAULT_MODEL`: model preselected in the header picker (default `qwen2.5:7b`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3055/v1/api";
pub const DEFAULT_AI_URL: &str = "http://localhost:8000";
pub const DEFAULT_MODEL: &str = "qwen2.5:7b";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
    pub ai_url: String,
    pub default_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl AppConfig {
    /// Configuration compiled into this build.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SQLCHAT_BACKEND_URL"),
            option_env!("SQLCHAT_AI_URL"),
            option_env!("SQLCHAT_DEFAULT_MODEL"),
        )
    }

    /// Build from optional raw values. Blank values fall back to defaults and
    /// base URLs lose any trailing slash.
    #[must_use]
    pub fn from_values(backend_url: Option<&str>, ai_url: Option<&str>, default_model: Option<&str>) -> Self {
        Self {
            backend_url: base_url(backend_url, DEFAULT_BACKEND_URL),
            ai_url: base_url(ai_url, DEFAULT_AI_URL),
            default_model: non_blank(default_model).unwrap_or(DEFAULT_MODEL).to_owned(),
        }
    }

    #[must_use]
    pub fn backend(&self, path: &str) -> String {
        join(&self.backend_url, path)
    }

    #[must_use]
    pub fn ai(&self, path: &str) -> String {
        join(&self.ai_url, path)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn base_url(raw: Option<&str>, default: &str) -> String {
    non_blank(raw).unwrap_or(default).trim_end_matches('/').to_owned()
}

fn join(base: &str, path: &str) -> String {
    format!("{base}/{}", path.trim_start_matches('/'))
}
