//! Admin bearer-token guard for catalog mutations.
//!
//! DESIGN
//! ======
//! The site has no user accounts. The only protected surface is catalog
//! administration, guarded by a single bearer token from the environment.
//! With no token configured the surface is disabled outright rather than
//! open.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::FromRef;
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;

use crate::state::AppState;

/// Extract the bearer token from an `Authorization` header value.
fn bearer_token(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

/// Proof that the request carried the configured admin token.
/// Use as a handler parameter to require admin access.
pub struct AdminAuth;

impl<S> axum::extract::FromRequestParts<S> for AdminAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(expected) = app_state.admin_token.as_deref() else {
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        };

        let supplied = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        match bearer_token(supplied) {
            Some(token) if token == expected => Ok(Self),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }
}
