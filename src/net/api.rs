//! HTTP plumbing shared by every backend and AI service call.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: every request fails with
//! `ApiError::Unavailable`, since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to `Network`, non-2xx statuses to
//! `Validation`/`Server` with the body's message, and shape mismatches to
//! `Decode`. Successful bodies are unwrapped from the backend's `metadata`
//! envelope before decoding.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::unwrap_envelope;
use crate::error::ApiError;

// =============================================================================
// ENDPOINTS
// =============================================================================

pub const SIGN_IN: &str = "/auth/signIn";
pub const SIGN_UP: &str = "/auth/signUp";
pub const CHATS: &str = "/chat";
pub const CHAT_INIT: &str = "/chat/init";
pub const DATABASES: &str = "/databases";
pub const DATABASES_REDISCOVER: &str = "/databases/rediscover";
pub const ASK_CHAT: &str = "/ask-chat";
pub const INIT_CHAT: &str = "/init-chat";

#[must_use]
pub fn chat_path(id: &str) -> String {
    format!("{CHATS}/{}", urlencoding::encode(id))
}

#[must_use]
pub fn messages_path(id: &str) -> String {
    format!("{}/messages", chat_path(id))
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// One multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, file_name: String, content: String },
}

impl FormField {
    #[must_use]
    pub fn text(name: &str, value: &str) -> Self {
        Self::Text { name: name.to_owned(), value: value.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(Value),
    Form(Vec<FormField>),
}

/// Interpret a finished response.
///
/// # Errors
///
/// Non-2xx statuses become `Validation`/`Server`; bodies that do not decode
/// as `T` become `Decode`.
pub fn decode_response<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, text));
    }
    let value = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str::<Value>(text).map_err(|e| ApiError::Decode(e.to_string()))?
    };
    serde_json::from_value(unwrap_envelope(value)).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue a request and decode its JSON response.
///
/// # Errors
///
/// See [`decode_response`]; transport failures are `Network`, and calls
/// outside the browser are `Unavailable`.
pub async fn request_json<T: DeserializeOwned>(
    method: Method,
    url: &str,
    bearer: Option<&str>,
    body: Body,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };
        let builder = match bearer {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        };
        let sent = match body {
            Body::Empty => builder.send().await,
            Body::Json(value) => builder.json(&value).map_err(|e| ApiError::Decode(e.to_string()))?.send().await,
            Body::Form(fields) => builder.body(form_data(&fields)?).map_err(|e| ApiError::Decode(e.to_string()))?.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        log::debug!("api: {method:?} {url} -> {status}");
        decode_response(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, bearer, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn form_data(fields: &[FormField]) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Decode(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    for field in fields {
        match field {
            FormField::Text { name, value } => form.append_with_str(name, value).map_err(js_err)?,
            FormField::File { name, file_name, content } => {
                let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
                let options = web_sys::BlobPropertyBag::new();
                options.set_type("text/plain");
                let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
                form.append_with_blob_and_filename(name, &blob, file_name).map_err(js_err)?;
            }
        }
    }
    Ok(form)
}
