//! Terminal client for a GenAI incident-response analysis backend.
//!
//! An operator pastes a suspicious log snippet, the client POSTs it to the
//! analysis service, and the result (summary, MITRE ATT&CK technique matches,
//! related evidence) is rendered in a TUI.
//!
//! # Architecture
//!
//! - [`api`] - the HTTP client, wire types, and error taxonomy
//! - [`config`] - base URL resolution (env var with a fixed fallback)
//! - [`session`] - the analysis session state machine (state/intent/reducer)
//! - [`ui`] - event loop, key handling, and rendering

pub mod api;
pub mod config;
pub mod logging;
pub mod session;
pub mod ui;
