//! Networking for the backend and AI services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns HTTP plumbing and endpoint paths, `types` the wire schema,
//! `backend` the service trait and its browser implementation, and
//! `pipeline` the async flows that tie service calls to client state.

pub mod api;
pub mod backend;
pub mod pipeline;
pub mod types;
