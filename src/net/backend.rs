//! The service boundary used by pages and the send pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatBackend` covers both remote services: the backend API (auth, saved
//! conversations, stored messages) and the AI service (introduction,
//! discovery, question answering, schema ingestion). `HttpBackend` is the
//! browser implementation; tests substitute an in-memory double.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::api::{self, Body, FormField, Method};
use super::types::{
    AskRequest, AskResponse, ChatInit, Conversation, DatabaseCatalog, NewConversation, NewMessage, SchemaInit,
    SignInRequest, SignInResponse, SignUpRequest, ThreadPage,
};
use crate::config::AppConfig;
use crate::error::ApiError;

/// File name under which schema text is uploaded to `/init-chat`.
pub const SCHEMA_FILE_NAME: &str = "schema.sql";

#[async_trait(?Send)]
pub trait ChatBackend {
    async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, ApiError>;
    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), ApiError>;

    async fn list_conversations(&self) -> Result<Vec<Conversation>, ApiError>;
    async fn create_conversation(&self, request: &NewConversation) -> Result<Conversation, ApiError>;
    async fn rename_conversation(&self, id: &str, title: &str) -> Result<(), ApiError>;
    async fn delete_conversation(&self, id: &str) -> Result<(), ApiError>;
    async fn load_messages(&self, id: &str) -> Result<ThreadPage, ApiError>;
    async fn save_message(&self, id: &str, message: &NewMessage) -> Result<(), ApiError>;

    async fn chat_init(&self) -> Result<ChatInit, ApiError>;
    async fn databases(&self, rescan: bool) -> Result<DatabaseCatalog, ApiError>;
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ApiError>;
    async fn init_schema(&self, schema: &str) -> Result<SchemaInit, ApiError>;
}

/// `gloo-net` implementation against the configured endpoints.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: AppConfig,
    access_token: Option<String>,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: AppConfig, access_token: Option<String>) -> Self {
        Self { config, access_token }
    }

    fn bearer(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    async fn backend<T: serde::de::DeserializeOwned>(&self, method: Method, path: &str, body: Body) -> Result<T, ApiError> {
        api::request_json(method, &self.config.backend(path), self.bearer(), body).await
    }

    async fn ai<T: serde::de::DeserializeOwned>(&self, method: Method, path: &str, body: Body) -> Result<T, ApiError> {
        api::request_json(method, &self.config.ai(path), None, body).await
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Body, ApiError> {
    serde_json::to_value(value).map(Body::Json).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, ApiError> {
        api::request_json(Method::Post, &self.config.backend(api::SIGN_IN), None, to_json(request)?).await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        let _: Value = api::request_json(Method::Post, &self.config.backend(api::SIGN_UP), None, to_json(request)?).await?;
        Ok(())
    }

    async fn list_conversations(&self) -> Result<Vec<Conversation>, ApiError> {
        self.backend(Method::Get, api::CHATS, Body::Empty).await
    }

    async fn create_conversation(&self, request: &NewConversation) -> Result<Conversation, ApiError> {
        self.backend(Method::Post, api::CHATS, to_json(request)?).await
    }

    async fn rename_conversation(&self, id: &str, title: &str) -> Result<(), ApiError> {
        let _: Value = self.backend(Method::Patch, &api::chat_path(id), Body::Json(json!({ "title": title }))).await?;
        Ok(())
    }

    async fn delete_conversation(&self, id: &str) -> Result<(), ApiError> {
        let _: Value = self.backend(Method::Delete, &api::chat_path(id), Body::Empty).await?;
        Ok(())
    }

    async fn load_messages(&self, id: &str) -> Result<ThreadPage, ApiError> {
        self.backend(Method::Get, &api::messages_path(id), Body::Empty).await
    }

    async fn save_message(&self, id: &str, message: &NewMessage) -> Result<(), ApiError> {
        let _: Value = self.backend(Method::Post, &api::messages_path(id), to_json(message)?).await?;
        Ok(())
    }

    async fn chat_init(&self) -> Result<ChatInit, ApiError> {
        self.ai(Method::Get, api::CHAT_INIT, Body::Empty).await
    }

    async fn databases(&self, rescan: bool) -> Result<DatabaseCatalog, ApiError> {
        if rescan {
            self.ai(Method::Post, api::DATABASES_REDISCOVER, Body::Empty).await
        } else {
            self.ai(Method::Get, api::DATABASES, Body::Empty).await
        }
    }

    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ApiError> {
        let fields = request.fields().into_iter().map(|(name, value)| FormField::text(name, value)).collect();
        self.ai(Method::Post, api::ASK_CHAT, Body::Form(fields)).await
    }

    async fn init_schema(&self, schema: &str) -> Result<SchemaInit, ApiError> {
        let file = FormField::File {
            name: "file".to_owned(),
            file_name: SCHEMA_FILE_NAME.to_owned(),
            content: schema.to_owned(),
        };
        self.ai(Method::Post, api::INIT_CHAT, Body::Form(vec![file])).await
    }
}
