//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat workspace chrome and message thread while
//! reading/writing shared state from Leptos context providers. Network work
//! is delegated to `net::pipeline` through `app::spawn`.

pub mod banner;
pub mod bar_chart;
pub mod chat_box;
pub mod chat_header;
pub mod chat_tab;
pub mod databases_panel;
pub mod line_chart;
pub mod message_input;
pub mod message_view;
pub mod recommend;
pub mod result_view;
pub mod schema_tab;
pub mod sidebar;
