//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the logic stays testable natively.

pub mod auth;
pub mod clock;
pub mod markdown;
pub mod storage;
