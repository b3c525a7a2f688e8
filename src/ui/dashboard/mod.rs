//! Dashboard state machine.
//!
//! Unidirectional data flow: intents go through the reducer, the
//! reducer returns the next state, the view renders it. Side effects
//! (API calls) are issued by [`crate::ui::app::App`]; the reducer only
//! records their outcomes.

mod intent;
mod reducer;
mod state;

pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use state::DashboardState;
