//! Shared catalog record model for the Skillbranch site.
//!
//! This crate owns the wire representation of the `services` table used by
//! both `server` (row serialization) and `client` (list rendering), plus the
//! display rules the two sides must agree on: which rows are visible and in
//! what order.


use serde::{Deserialize, Serialize};

/// Error returned by [`parse_slug`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    /// The candidate slug was empty after trimming.
    #[error("slug is empty")]
    Empty,
    /// The candidate slug contains a character outside `[a-z0-9-]`.
    #[error("slug contains invalid character: {0:?}")]
    InvalidChar(char),
}

/// One row of the `services` table as it travels over the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    /// Routing key for the `/services/{slug}` detail target.
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Key into the client's closed icon lookup. Unknown names render the
    /// fallback symbol, so this is display data, never validated here.
    pub icon: String,
    pub active: bool,
    pub sort_order: i32,
}

/// Reduce raw service rows to the displayable list: inactive rows are
/// dropped and the rest ordered by `sort_order` ascending. Ties break by
/// `id` so repeated renders of the same input are deterministic.
#[must_use]
pub fn display_order(rows: Vec<ServiceRecord>) -> Vec<ServiceRecord> {
    let mut visible: Vec<ServiceRecord> = rows.into_iter().filter(|row| row.active).collect();
    visible.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.id.cmp(&b.id)));
    visible
}

/// Validate and normalize a slug candidate for the services table.
///
/// Trims surrounding whitespace and lowercases ASCII. Accepts `a-z`, `0-9`,
/// and `-` only.
///
/// # Errors
///
/// Returns [`SlugError::Empty`] for a blank candidate and
/// [`SlugError::InvalidChar`] for the first character outside the allowed
/// set.
pub fn parse_slug(raw: &str) -> Result<String, SlugError> {
    let candidate = raw.trim().to_ascii_lowercase();
    if candidate.is_empty() {
        return Err(SlugError::Empty);
    }
    for ch in candidate.chars() {
        if !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-') {
            return Err(SlugError::InvalidChar(ch));
        }
    }
    Ok(candidate)
}
