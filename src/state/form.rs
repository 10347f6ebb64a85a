//! Draft parameters for the next question.
//!
//! The schema text and model selection are read at send time and never
//! retained by the thread.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::AskRequest;

/// A model offered in the header picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOption {
    pub label: &'static str,
    pub id: &'static str,
}

pub const MODELS: &[ModelOption] = &[
    ModelOption { label: "Qwen 2.5 7B (Default)", id: "qwen2.5:7b" },
    ModelOption { label: "Qwen 2.5 14B", id: "qwen2.5:14b" },
    ModelOption { label: "Qwen 3 14B", id: "qwen3:14b" },
    ModelOption { label: "Qwen 3 30B", id: "qwen3:30b" },
    ModelOption { label: "GPT-OSS 20B", id: "gpt-oss:20b" },
];

/// Picker label for a model id; unknown ids show as themselves.
#[must_use]
pub fn model_label(id: &str) -> &str {
    MODELS.iter().find(|m| m.id == id).map_or(id, |m| m.label)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub schema: String,
    pub model: String,
    /// Text in the message input.
    pub question: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::with_model(crate::config::DEFAULT_MODEL)
    }
}

impl FormState {
    #[must_use]
    pub fn with_model(model: &str) -> Self {
        Self { schema: String::new(), model: model.to_owned(), question: String::new() }
    }

    pub fn set_schema(&mut self, schema: impl Into<String>) {
        self.schema = schema.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    /// Clear the input and hand back what was typed.
    pub fn take_question(&mut self) -> String {
        std::mem::take(&mut self.question)
    }

    #[must_use]
    pub fn has_schema(&self) -> bool {
        !self.schema.trim().is_empty()
    }

    /// Request fields for `question` under the current schema and model.
    #[must_use]
    pub fn ask_request(&self, question: &str, session_id: Option<String>) -> AskRequest {
        AskRequest {
            question: question.to_owned(),
            schema: self.schema.clone(),
            model: self.model.clone(),
            session_id,
        }
    }
}
