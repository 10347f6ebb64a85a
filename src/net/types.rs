//! Wire DTOs for the backend and AI service boundaries.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON each service emits (camelCase for the backend,
//! snake_case for the AI service). Loosely shaped fields such as
//! recommendation lists and `data` payloads deserialize leniently so a
//! partial payload still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use charts::{ResultSet, Scalar};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// AUTH
// =============================================================================

/// The signed-in account as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl User {
    /// Name shown in the sidebar user menu.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() { &self.email } else { &self.username }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SignInResponse {
    pub user: User,
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub gender: String,
}

// =============================================================================
// CONVERSATIONS
// =============================================================================

/// A saved conversation in the history list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub schema: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewConversation {
    pub title: String,
    pub schema: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommends: Vec<String>,
}

/// A message as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    #[serde(rename = "chatId", default)]
    pub chat_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, deserialize_with = "deserialize_result_data")]
    pub data: Option<ResultSet>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Body of `POST /chat/{id}/messages`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub body: String,
    pub data: Value,
}

impl NewMessage {
    #[must_use]
    pub fn question(text: &str) -> Self {
        Self { kind: "question".to_owned(), body: text.to_owned(), data: Value::Object(serde_json::Map::new()) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatMeta {
    #[serde(default, deserialize_with = "deserialize_recommends")]
    pub recommends: Vec<String>,
}

/// Response of `GET /chat/{id}/messages`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ThreadPage {
    #[serde(default)]
    pub chat: Option<ChatMeta>,
    #[serde(default)]
    pub messages: Vec<WireMessage>,
}

impl ThreadPage {
    #[must_use]
    pub fn recommends(&self) -> Vec<String> {
        self.chat.as_ref().map(|c| c.recommends.clone()).unwrap_or_default()
    }
}

// =============================================================================
// AI SERVICE
// =============================================================================

/// Response of `GET /chat/init`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatInit {
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub sql_content: String,
    #[serde(default, deserialize_with = "deserialize_recommends")]
    pub recommends: Vec<String>,
    #[serde(default)]
    pub discovered_databases: Vec<DiscoveredDatabase>,
}

/// Response of `POST /init-chat`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SchemaInit {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_recommends")]
    pub recommends: Vec<String>,
    #[serde(default)]
    pub sql_content: String,
}

/// A database found by the AI service's discovery scan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredDatabase {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub size_readable: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl DiscoveredDatabase {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.database.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown")
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self.kind.as_str() {
            "postgresql" => "🐘",
            "mysql" => "🐬",
            "sqlite" => "💾",
            _ => "🗄️",
        }
    }
}

/// Response of `GET /databases` and `POST /databases/rediscover`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DatabaseCatalog {
    #[serde(default)]
    pub databases: Vec<DiscoveredDatabase>,
    #[serde(default)]
    pub summary: String,
}

/// Multipart fields for `POST /ask-chat`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
    pub schema: String,
    pub model: String,
    pub session_id: Option<String>,
}

impl AskRequest {
    /// Form fields in submission order; `session_id` only when known.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("question", self.question.as_str()), ("schema", self.schema.as_str()), ("model", self.model.as_str())];
        if let Some(session_id) = self.session_id.as_deref() {
            fields.push(("session_id", session_id));
        }
        fields
    }
}

/// Response of `POST /ask-chat`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub explain: String,
    #[serde(default)]
    pub rows: Option<Vec<Vec<Scalar>>>,
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub history_length: Option<u32>,
}

impl AskResponse {
    /// The tabular result, when the query produced any columns or rows.
    #[must_use]
    pub fn result(&self) -> Option<ResultSet> {
        let columns = self.columns.clone().unwrap_or_default();
        let rows = self.rows.clone().unwrap_or_default();
        if columns.is_empty() && rows.is_empty() {
            None
        } else {
            Some(ResultSet::new(columns, rows))
        }
    }
}

// =============================================================================
// LENIENT DECODERS
// =============================================================================

/// Strip the backend's `{ "metadata": ... }` envelope when present.
#[must_use]
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.get("metadata").is_some_and(|m| !m.is_null()) => {
            map.remove("metadata").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Normalize a recommendation payload into question strings.
///
/// Accepts an array of strings, an array of objects carrying a `question`
/// (or any string field), a JSON array encoded in a string, or a
/// newline-separated list.
#[must_use]
pub fn parse_recommends(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(recommend_item).collect(),
        Value::String(raw) => {
            let trimmed = raw.trim();
            if let (Some(start), Some(end)) = (trimmed.find('['), trimmed.rfind(']')) {
                if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&trimmed[start..=end]) {
                    return items.iter().filter_map(recommend_item).collect();
                }
            }
            trimmed
                .lines()
                .map(|line| line.trim().trim_start_matches(['-', '*']).trim())
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect()
        }
        _ => Vec::new(),
    }
}

fn recommend_item(item: &Value) -> Option<String> {
    let text = match item {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map
            .get("question")
            .and_then(Value::as_str)
            .or_else(|| map.values().find_map(Value::as_str))?,
        _ => return None,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn deserialize_recommends<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_recommends(&value))
}

/// `data` is `{rows, columns}` for responses and `{}` or `null` otherwise.
fn deserialize_result_data<'de, D>(deserializer: D) -> Result<Option<ResultSet>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    let parsed: ResultSet = match serde_json::from_value(value) {
        Ok(rs) => rs,
        Err(_) => return Ok(None),
    };
    Ok((!parsed.columns.is_empty() || !parsed.rows.is_empty()).then_some(parsed))
}
