//! The inventory service client: wire types, typed errors, the
//! reqwest-based HTTP client, and the sequential command worker the UI
//! dispatches to.

pub mod client;
pub mod error;
pub mod types;
pub mod worker;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{Medicine, MedicineDraft, UserProfile};
pub use worker::ApiCommand;
