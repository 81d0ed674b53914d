//! Networking module for the site's REST reads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The services page is the only remote-backed view; `api` wraps its single
//! read endpoint. Everything else on the site is static content.

pub mod api;
