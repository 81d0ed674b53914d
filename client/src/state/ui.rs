//! Site-wide UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (currently only the dark-mode flag)
//! out of catalog data so page content stays a pure function of its records.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through context by the header and pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
