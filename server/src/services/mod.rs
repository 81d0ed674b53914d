//! Service-layer modules between routes and storage.

pub mod catalog;
