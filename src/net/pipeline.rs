//! Async flows tying service calls to client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components spawn these with `leptos::task::spawn_local`. Each
//! flow takes the backend as a trait object and state as [`StateCell`]s, so
//! the same code drives signals in the browser and plain cells in tests.
//!
//! ERROR HANDLING
//! ==============
//! Thread and history failures land in their state's `error` field for the
//! banner. Message persistence failures are logged only: the answer is
//! already on screen and the backend copy is best-effort.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use super::backend::ChatBackend;
use super::types::{Conversation, NewConversation, NewMessage, SignInRequest};
use crate::error::ApiError;
use crate::state::StateCell;
use crate::state::auth::AuthState;
use crate::state::databases::DatabasesState;
use crate::state::form::FormState;
use crate::state::history::{HistoryLoad, HistoryState};
use crate::state::thread::{SendRejected, ThreadState};

/// Title used when the AI service does not suggest one.
pub const FALLBACK_TITLE: &str = "New chat";

async fn persist(backend: &dyn ChatBackend, conversation_id: &str, message: &NewMessage) {
    if let Err(e) = backend.save_message(conversation_id, message).await {
        log::warn!("pipeline: failed to persist {} for {conversation_id} ({}): {e}", message.kind, e.error_code());
    }
}

/// Switch the thread to `conversation_id` and fill it.
///
/// A saved conversation loads its stored messages. The draft (`None`) asks
/// the AI service for an introduction, recommendations and discovered
/// databases, and seeds an empty schema with the service's schema text.
pub async fn open_conversation(
    backend: &dyn ChatBackend,
    thread: &impl StateCell<ThreadState>,
    databases: &impl StateCell<DatabasesState>,
    form: &impl StateCell<FormState>,
    conversation_id: Option<String>,
) {
    let Some(ticket) = thread.with_mut(|t| t.begin_load(conversation_id)) else {
        return;
    };

    if let Some(id) = ticket.conversation_id.as_deref() {
        let result = backend.load_messages(id).await;
        thread.with_mut(|t| t.finish_load(&ticket, result));
        return;
    }

    match backend.chat_init().await {
        Ok(init) => {
            let current = thread.with_mut(|t| {
                if !t.is_current(&ticket) {
                    return false;
                }
                t.show_introduction(&init.introduction);
                t.recommends.clone_from(&init.recommends);
                true
            });
            if current != Some(true) {
                return;
            }
            databases.with_mut(|d| d.seed(init.discovered_databases));
            if !init.sql_content.trim().is_empty() {
                form.with_mut(|f| {
                    if !f.has_schema() {
                        f.set_schema(init.sql_content);
                    }
                });
            }
        }
        Err(e) => log::warn!("pipeline: chat init failed ({}): {e}", e.error_code()),
    }
}

/// Ask the AI service a question in the current thread.
///
/// The question is appended before any request; exactly one response is
/// appended on success. For saved conversations both are also persisted.
///
/// # Errors
///
/// Returns the rejection when the text is blank or a send is already in
/// flight; no request is issued in either case.
pub async fn send_question(
    backend: &dyn ChatBackend,
    thread: &impl StateCell<ThreadState>,
    form: &impl StateCell<FormState>,
    text: &str,
) -> Result<(), SendRejected> {
    let ticket = match thread.with_mut(|t| t.begin_send(text)) {
        Some(result) => result?,
        None => return Ok(()),
    };
    let Some(request) = form.inspect(|f| f.ask_request(&ticket.question, ticket.session_id.clone())) else {
        thread.with_mut(|t| t.finish_send(&ticket, Err(ApiError::StateGone)));
        return Ok(());
    };

    if let Some(id) = ticket.conversation_id.as_deref() {
        persist(backend, id, &NewMessage::question(&ticket.question)).await;
    }

    log::debug!("pipeline: asking with model {}", request.model);
    let result = backend.ask(&request).await;
    let response = thread.with_mut(|t| t.finish_send(&ticket, result)).flatten();

    if let (Some(message), Some(id)) = (response, ticket.conversation_id.as_deref()) {
        persist(backend, id, &message.to_new_message()).await;
    }
    Ok(())
}

/// Fetch the conversation list if the active id changed since the last
/// fetch. A saved conversation's stored schema replaces the form's schema,
/// but only when this fetch is still the latest one and it succeeded.
pub async fn load_history(
    backend: &dyn ChatBackend,
    history: &impl StateCell<HistoryState>,
    form: &impl StateCell<FormState>,
    active_id: Option<String>,
) {
    let Some(Some(ticket)) = history.with_mut(|h| h.begin_load(active_id)) else {
        return;
    };
    let result = backend.list_conversations().await;
    let Some(HistoryLoad::Current(active)) = history.with_mut(|h| h.finish_load(&ticket, result)) else {
        return;
    };
    if ticket.active_id.is_some() {
        let schema = active.map(|c| c.schema).unwrap_or_default();
        form.with_mut(|f| f.set_schema(schema));
    }
}

/// Turn the schema in the form into a saved conversation.
///
/// The AI service proposes a title and starter questions; the backend stores
/// the conversation, which is then listed at the top of the history.
///
/// # Errors
///
/// `EmptyInput` for a blank schema, otherwise whichever call failed.
pub async fn start_conversation(
    backend: &dyn ChatBackend,
    history: &impl StateCell<HistoryState>,
    form: &impl StateCell<FormState>,
) -> Result<Conversation, ApiError> {
    let schema = form.inspect(|f| f.schema.trim().to_owned()).unwrap_or_default();
    if schema.is_empty() {
        return Err(ApiError::EmptyInput);
    }
    let init = backend.init_schema(&schema).await?;
    let title = match init.title.trim() {
        "" => FALLBACK_TITLE.to_owned(),
        title => title.to_owned(),
    };
    let conversation = backend
        .create_conversation(&NewConversation { title, schema, recommends: init.recommends })
        .await?;
    log::info!("pipeline: created conversation {}", conversation.id);
    history.with_mut(|h| h.upsert(conversation.clone()));
    Ok(conversation)
}

/// Rename a saved conversation.
///
/// # Errors
///
/// `EmptyInput` for a blank title, otherwise the backend failure.
pub async fn rename_conversation(
    backend: &dyn ChatBackend,
    history: &impl StateCell<HistoryState>,
    id: &str,
    title: &str,
) -> Result<(), ApiError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ApiError::EmptyInput);
    }
    backend.rename_conversation(id, title).await?;
    history.with_mut(|h| h.rename(id, title));
    Ok(())
}

/// Delete a saved conversation and drop it from the history list.
///
/// # Errors
///
/// The backend failure; the entry stays listed.
pub async fn delete_conversation(
    backend: &dyn ChatBackend,
    history: &impl StateCell<HistoryState>,
    id: &str,
) -> Result<(), ApiError> {
    backend.delete_conversation(id).await?;
    history.with_mut(|h| h.remove(id));
    Ok(())
}

/// Fetch the discovered databases, or trigger a rescan.
pub async fn refresh_databases(backend: &dyn ChatBackend, databases: &impl StateCell<DatabasesState>, rescan: bool) {
    if databases.with_mut(|d| d.begin(rescan)) != Some(true) {
        return;
    }
    let result = backend.databases(rescan).await;
    databases.with_mut(|d| d.finish(result));
}

/// Sign in and persist the session.
///
/// # Errors
///
/// The backend failure; the session is left untouched.
pub async fn sign_in(
    backend: &dyn ChatBackend,
    auth: &impl StateCell<AuthState>,
    request: &SignInRequest,
) -> Result<(), ApiError> {
    let response = backend.sign_in(request).await?;
    auth.with_mut(|a| a.sign_in(response));
    Ok(())
}
