//! Configuration: TOML file at the platform config dir, with serde
//! defaults so a missing or partial file still yields a usable setup.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
