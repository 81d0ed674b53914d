//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the fetch only runs in
//! the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode of the read — transport error, non-OK status, bad
//! body — collapses into one error string. Callers log it and degrade to an
//! empty list; nothing is surfaced to the visitor.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::ServiceRecord;

/// Read endpoint for the active service list.
pub const SERVICES_ENDPOINT: &str = "/api/services";

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(status: u16) -> String {
    format!("service list request failed: {status}")
}

/// Fetch active services from [`SERVICES_ENDPOINT`].
///
/// The server already filters and orders the rows; callers still pass the
/// result through `records::display_order` so rendering does not depend on
/// the transport behaving.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn fetch_services() -> Result<Vec<ServiceRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SERVICES_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_failed_message(resp.status()));
        }
        resp.json::<Vec<ServiceRecord>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
