//! Reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ui` holds site-wide chrome state provided via context. `services` holds
//! the fetch lifecycle of the remote-backed list and is owned by the view
//! that issues the fetch, never shared.

pub mod services;
pub mod ui;
