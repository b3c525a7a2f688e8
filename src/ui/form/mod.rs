//! The add/edit medicine form overlay.
//!
//! Same unidirectional shape as the dashboard: intents through a pure
//! reducer. Submission parsing lives in [`state::parse_draft`]; the
//! actual API call is dispatched by `App`.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{parse_draft, FormField, FormMode, FormState};
