//! Saved-conversation list for the signed-in user.
//!
//! DESIGN
//! ======
//! The list is fetched once per change of the active conversation id. The
//! same ticket scheme as the thread keeps a slow fetch from overwriting a
//! newer one.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::error::ApiError;
use crate::net::types::Conversation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTicket {
    seq: u64,
    pub active_id: Option<String>,
}

/// Outcome of [`HistoryState::finish_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryLoad {
    /// The list was installed; carries the active conversation when listed.
    Current(Option<Conversation>),
    /// A newer fetch was started; nothing changed.
    Stale,
    /// The fetch failed; the previous list is kept.
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct HistoryState {
    pub items: Vec<Conversation>,
    pub loading: bool,
    pub error: Option<String>,
    /// Active id of the last fetch started; `None` before the first.
    loaded_for: Option<Option<String>>,
    seq: u64,
}

impl HistoryState {
    /// Start a fetch unless one was already started for `active_id`.
    pub fn begin_load(&mut self, active_id: Option<String>) -> Option<HistoryTicket> {
        if self.loaded_for.as_ref() == Some(&active_id) {
            return None;
        }
        self.seq += 1;
        self.loaded_for = Some(active_id.clone());
        self.loading = true;
        Some(HistoryTicket { seq: self.seq, active_id })
    }

    /// Install the fetched list if `ticket` is still the latest fetch.
    pub fn finish_load(&mut self, ticket: &HistoryTicket, result: Result<Vec<Conversation>, ApiError>) -> HistoryLoad {
        if ticket.seq != self.seq {
            log::debug!("history: dropping stale list for {:?}", ticket.active_id);
            return HistoryLoad::Stale;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                HistoryLoad::Current(ticket.active_id.as_deref().and_then(|id| self.find(id)).cloned())
            }
            Err(e) => {
                log::warn!("history: load failed ({}): {e}", e.error_code());
                self.error = Some(e.to_string());
                HistoryLoad::Failed
            }
        }
    }

    /// Force the next `begin_load` to fetch.
    pub fn invalidate(&mut self) {
        self.loaded_for = None;
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Conversation> {
        self.items.iter().find(|c| c.id == id)
    }

    /// Insert a new conversation at the top, or replace the existing entry.
    pub fn upsert(&mut self, conversation: Conversation) {
        match self.items.iter_mut().find(|c| c.id == conversation.id) {
            Some(existing) => *existing = conversation,
            None => self.items.insert(0, conversation),
        }
    }

    /// Change a title. Returns `false` when the id is unknown.
    pub fn rename(&mut self, id: &str, title: &str) -> bool {
        match self.items.iter_mut().find(|c| c.id == id) {
            Some(conversation) => {
                title.trim().clone_into(&mut conversation.title);
                true
            }
            None => false,
        }
    }

    /// Drop an entry locally. Returns the removed conversation.
    pub fn remove(&mut self, id: &str) -> Option<Conversation> {
        let index = self.items.iter().position(|c| c.id == id)?;
        Some(self.items.remove(index))
    }
}
