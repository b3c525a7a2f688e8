use crate::api::types::Medicine;

/// The dashboard view state. Mutated only by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Last successfully fetched inventory.
    pub medicines: Vec<Medicine>,
    /// True while a fetch is in flight. Starts true: loading the
    /// inventory is the first thing the app does.
    pub loading: bool,
    /// Message from the most recent failed call. Cleared by user
    /// dismissal or by the next successful fetch.
    pub error: Option<String>,
    /// Record awaiting delete confirmation.
    pub pending_delete: Option<i64>,
    /// List cursor.
    pub selected: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            medicines: Vec::new(),
            loading: true,
            error: None,
            pending_delete: None,
            selected: 0,
        }
    }
}

impl DashboardState {
    pub fn selected_medicine(&self) -> Option<&Medicine> {
        self.medicines.get(self.selected)
    }
}
