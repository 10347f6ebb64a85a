//! Message thread for the open conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat box renders `messages`; the send pipeline appends the question
//! optimistically and the response on completion; conversation switches
//! replace the whole thread with the backend's copy.
//!
//! DESIGN
//! ======
//! Loads and sends are sequenced by tickets. `begin_load` bumps `load_seq`,
//! so a load or send that started under a previous conversation finds its
//! ticket stale on completion and is dropped. Only one send may be in flight.

#[cfg(test)]
#[path = "thread_test.rs"]
mod thread_test;

use charts::ResultSet;

use crate::error::ApiError;
use crate::net::types::{AskResponse, NewMessage, ThreadPage, WireMessage};
use crate::util::clock;

/// What a message carries.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageKind {
    /// Greeting shown in an empty draft thread.
    Introduction { body: String },
    Question { text: String },
    Response { query: String, explanation: String, result: Option<ResultSet> },
}

impl MessageKind {
    /// Wire `type` tag.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Introduction { .. } => "introduction",
            Self::Question { .. } => "question",
            Self::Response { .. } => "response",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Client-side key for keyed rendering.
    pub id: String,
    pub conversation_id: Option<String>,
    pub kind: MessageKind,
    pub created_at: String,
}

impl Message {
    #[must_use]
    pub fn new(conversation_id: Option<String>, kind: MessageKind) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), conversation_id, kind, created_at: clock::now_iso() }
    }

    /// Displayed text. Responses concatenate query and explanation.
    #[must_use]
    pub fn body(&self) -> String {
        match &self.kind {
            MessageKind::Introduction { body } => body.clone(),
            MessageKind::Question { text } => text.clone(),
            MessageKind::Response { query, explanation, .. } => format!("{query}{explanation}"),
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&ResultSet> {
        match &self.kind {
            MessageKind::Response { result, .. } => result.as_ref(),
            _ => None,
        }
    }

    /// Rebuild a stored message under `conversation_id`.
    ///
    /// The backend keeps only the concatenated body, so a reloaded response
    /// carries it as its explanation with an empty query.
    #[must_use]
    pub fn from_wire(conversation_id: &str, wire: WireMessage) -> Self {
        let kind = match wire.kind.as_str() {
            "question" => MessageKind::Question { text: wire.body },
            "response" => MessageKind::Response { query: String::new(), explanation: wire.body, result: wire.data },
            _ => MessageKind::Introduction { body: wire.body },
        };
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            conversation_id: Some(conversation_id.to_owned()),
            kind,
            created_at: wire.created_at,
        }
    }

    /// Persistence payload for `POST /chat/{id}/messages`.
    #[must_use]
    pub fn to_new_message(&self) -> NewMessage {
        let data = match self.result() {
            Some(result) => serde_json::json!({ "rows": result.rows, "columns": result.columns }),
            None => serde_json::json!({}),
        };
        NewMessage { kind: self.kind.tag().to_owned(), body: self.body(), data }
    }
}

/// Why a send did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SendRejected {
    #[error("question is empty")]
    EmptyInput,
    #[error("a question is already being answered")]
    Busy,
    #[error("the conversation is still loading")]
    Loading,
}

/// Issued by [`ThreadState::begin_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    pub conversation_id: Option<String>,
}

/// Issued by [`ThreadState::begin_send`]; carries what the request needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTicket {
    load_seq: u64,
    send_seq: u64,
    pub conversation_id: Option<String>,
    pub question: String,
    pub session_id: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ThreadState {
    pub conversation_id: Option<String>,
    pub messages: Vec<Message>,
    pub recommends: Vec<String>,
    /// AI-service session, adopted from the first response of this thread.
    pub session_id: Option<String>,
    pub history_length: u32,
    /// A history load is in flight.
    pub loading: bool,
    /// Transient banner text.
    pub error: Option<String>,
    pending_send: Option<u64>,
    load_seq: u64,
    send_seq: u64,
}

impl ThreadState {
    /// A send is awaiting its response.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending_send.is_some()
    }

    /// No answer is pending and no stored thread is loading.
    #[must_use]
    pub fn accepts_send(&self) -> bool {
        !self.is_pending() && !self.loading
    }

    /// Switch to `conversation_id` (or the empty draft when `None`), clearing
    /// the thread. Any load or send started before this call becomes stale.
    pub fn begin_load(&mut self, conversation_id: Option<String>) -> LoadTicket {
        self.load_seq += 1;
        self.conversation_id.clone_from(&conversation_id);
        self.messages.clear();
        self.recommends.clear();
        self.session_id = None;
        self.history_length = 0;
        self.pending_send = None;
        self.error = None;
        self.loading = conversation_id.is_some();
        LoadTicket { seq: self.load_seq, conversation_id }
    }

    /// No conversation switch happened since `ticket` was issued.
    #[must_use]
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.seq == self.load_seq
    }

    /// Install a loaded thread. Returns `false` when the ticket is stale and
    /// nothing changed.
    pub fn finish_load(&mut self, ticket: &LoadTicket, result: Result<ThreadPage, ApiError>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("thread: dropping stale load for {:?}", ticket.conversation_id);
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                let id = ticket.conversation_id.clone().unwrap_or_default();
                self.recommends = page.recommends();
                self.messages = page.messages.into_iter().map(|w| Message::from_wire(&id, w)).collect();
            }
            Err(e) => {
                log::warn!("thread: load failed ({}): {e}", e.error_code());
                self.error = Some(format!("Could not load messages: {e}"));
            }
        }
        true
    }

    /// Show the greeting in an empty draft thread. Ignored once the thread
    /// has a conversation or any message.
    pub fn show_introduction(&mut self, body: &str) -> bool {
        if self.conversation_id.is_some() || !self.messages.is_empty() || body.trim().is_empty() {
            return false;
        }
        let message = Message::new(None, MessageKind::Introduction { body: body.to_owned() });
        self.messages.push(message);
        true
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Validate and start a send: appends the question immediately.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for blank text, `Busy` while another send is pending and
    /// `Loading` while the thread's stored messages are still arriving. None
    /// of them touches the thread.
    pub fn begin_send(&mut self, text: &str) -> Result<SendTicket, SendRejected> {
        let question = text.trim();
        if question.is_empty() {
            return Err(SendRejected::EmptyInput);
        }
        if self.pending_send.is_some() {
            return Err(SendRejected::Busy);
        }
        if self.loading {
            return Err(SendRejected::Loading);
        }
        self.send_seq += 1;
        self.pending_send = Some(self.send_seq);
        self.error = None;
        let conversation_id = self.conversation_id.clone();
        self.messages
            .push(Message::new(conversation_id.clone(), MessageKind::Question { text: question.to_owned() }));
        Ok(SendTicket {
            load_seq: self.load_seq,
            send_seq: self.send_seq,
            conversation_id,
            question: question.to_owned(),
            session_id: self.session_id.clone(),
        })
    }

    /// Apply a send's outcome. Returns the appended response, or `None` when
    /// the send failed or its thread has since been replaced.
    pub fn finish_send(&mut self, ticket: &SendTicket, result: Result<AskResponse, ApiError>) -> Option<Message> {
        if ticket.load_seq != self.load_seq {
            log::debug!("thread: dropping stale response for {:?}", ticket.conversation_id);
            return None;
        }
        if self.pending_send == Some(ticket.send_seq) {
            self.pending_send = None;
        }
        match result {
            Ok(response) => {
                if self.session_id.is_none() {
                    self.session_id.clone_from(&response.session_id);
                }
                if let Some(len) = response.history_length {
                    self.history_length = len;
                }
                let result = response.result();
                let message = Message::new(
                    ticket.conversation_id.clone(),
                    MessageKind::Response { query: response.query, explanation: response.explain, result },
                );
                self.messages.push(message.clone());
                Some(message)
            }
            Err(e) => {
                log::warn!("thread: ask failed ({}): {e}", e.error_code());
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
