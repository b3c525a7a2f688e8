use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::DashboardState;

pub struct DashboardReducer;

impl DashboardReducer {
    /// Process an intent and return the new state. Pure function, no
    /// side effects.
    pub fn reduce(state: DashboardState, intent: DashboardIntent) -> DashboardState {
        match intent {
            DashboardIntent::FetchStarted => DashboardState {
                loading: true,
                ..state
            },
            DashboardIntent::InventoryLoaded { medicines } => {
                let selected = if medicines.is_empty() {
                    0
                } else {
                    state.selected.min(medicines.len() - 1)
                };
                DashboardState {
                    medicines,
                    loading: false,
                    error: None,
                    selected,
                    ..state
                }
            }
            DashboardIntent::FetchFailed { message } => DashboardState {
                loading: false,
                error: Some(message),
                ..state
            },
            DashboardIntent::MutationFailed { message } => DashboardState {
                error: Some(message),
                ..state
            },
            DashboardIntent::RequestDelete { id } => DashboardState {
                pending_delete: Some(id),
                ..state
            },
            DashboardIntent::ConfirmDelete | DashboardIntent::CancelDelete => DashboardState {
                pending_delete: None,
                ..state
            },
            DashboardIntent::DismissError => DashboardState {
                error: None,
                ..state
            },
            DashboardIntent::MoveSelection { delta } => {
                let len = state.medicines.len();
                if len == 0 {
                    return DashboardState {
                        selected: 0,
                        ..state
                    };
                }

                let current = state.selected.min(len - 1);
                let next = if delta.is_negative() {
                    if current == 0 {
                        len - 1
                    } else {
                        current - 1
                    }
                } else if current + 1 >= len {
                    0
                } else {
                    current + 1
                };

                DashboardState {
                    selected: next,
                    ..state
                }
            }
        }
    }
}
