//! Service-list state for the remote-backed services view.
//!
//! DESIGN
//! ======
//! The list has exactly three phases: loading, resolved, failed. A failed
//! fetch degrades to an empty list that renders the same as "no active
//! services"; the error itself only reaches the diagnostic log.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use records::ServiceRecord;

/// Fetch lifecycle of a remote-backed view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Query outstanding; placeholder skeletons render.
    #[default]
    Loading,
    /// Query resolved; `items` holds the display rows.
    Ready,
    /// Query failed; the view renders an empty list.
    Failed,
}

/// State owned by one services view instance.
#[derive(Clone, Debug, Default)]
pub struct ServicesState {
    pub items: Vec<ServiceRecord>,
    pub phase: LoadPhase,
}

impl ServicesState {
    /// Apply a successful fetch result. Rows are reduced to display order
    /// here so the view renders them verbatim.
    pub fn resolve(&mut self, rows: Vec<ServiceRecord>) {
        self.items = records::display_order(rows);
        self.phase = LoadPhase::Ready;
    }

    /// Apply a failed fetch. The list empties rather than surfacing the
    /// error to the visitor.
    pub fn fail(&mut self) {
        self.items.clear();
        self.phase = LoadPhase::Failed;
    }
}
