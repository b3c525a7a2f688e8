use crate::api::types::Medicine;

/// Dashboard state transitions.
#[derive(Debug, Clone)]
pub enum DashboardIntent {
    /// A fetch was dispatched to the worker.
    FetchStarted,
    /// Fetch settled successfully; replaces the inventory and clears
    /// any stale error banner.
    InventoryLoaded { medicines: Vec<Medicine> },
    /// Fetch settled with an error.
    FetchFailed { message: String },
    /// A mutation failed. The inventory is left untouched.
    MutationFailed { message: String },
    /// Deletion requested for a record; waits for confirmation.
    RequestDelete { id: i64 },
    /// Pending deletion confirmed. The call itself is dispatched by
    /// `App` after reducing this.
    ConfirmDelete,
    /// Pending deletion declined. No call is made.
    CancelDelete,
    /// Error banner dismissed.
    DismissError,
    MoveSelection { delta: i32 },
}
