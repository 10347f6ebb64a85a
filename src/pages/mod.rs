//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, loads on route change)
//! and delegates rendering details to `components`.

pub mod chat;
pub mod login;
pub mod pricing;
pub mod register;
