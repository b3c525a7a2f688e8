//! pharmadash — terminal dashboard for a pharmacy inventory service.
//!
//! The owner's medicine list lives on the remote service; this program
//! renders it and issues create/update/delete calls against the REST
//! API. After every successful mutation the full list is re-fetched:
//! the server is the single source of truth and local state is never
//! patched in place.

pub mod api;
pub mod config;
pub mod session;
pub mod trace;
pub mod ui;
