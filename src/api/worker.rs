//! The API command worker.
//!
//! All HTTP happens on a dedicated thread owning its own tokio
//! runtime; the UI stays a plain blocking event loop. Commands are
//! processed strictly in order, so a refresh issued after a mutation
//! always observes that mutation, and overlapping refreshes settle in
//! request order.

use std::sync::mpsc as std_mpsc;
use std::thread;

use tokio::sync::mpsc;

use crate::api::client::ApiClient;
use crate::api::types::MedicineDraft;
use crate::config::ApiConfig;
use crate::ui::events::{ApiEvent, AppEvent};

/// Commands the UI can issue to the worker.
#[derive(Debug)]
pub enum ApiCommand {
    FetchInventory,
    FetchProfile,
    CreateMedicine { draft: MedicineDraft },
    UpdateMedicine { id: i64, draft: MedicineDraft },
    DeleteMedicine { id: i64 },
}

const COMMAND_BUFFER: usize = 16;

/// Spawn the worker thread and return its command sender.
///
/// Every command produces exactly one reply on the UI event channel —
/// the loading flag relies on that.
pub fn spawn(config: ApiConfig, events: std_mpsc::Sender<AppEvent>) -> mpsc::Sender<ApiCommand> {
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);

    thread::Builder::new()
        .name("api-worker".to_string())
        .spawn(move || run(config, rx, events))
        .expect("Failed to spawn API worker thread");

    tx
}

fn run(
    config: ApiConfig,
    mut rx: mpsc::Receiver<ApiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build API worker runtime");

    let client = ApiClient::new(&config);

    runtime.block_on(async move {
        while let Some(command) = rx.recv().await {
            tracing::debug!(?command, "handling API command");
            let event = handle(&client, command).await;
            if events.send(AppEvent::Api(event)).is_err() {
                // UI is gone; nothing left to report to.
                break;
            }
        }
    });
}

async fn handle(client: &ApiClient, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::FetchInventory => match client.list_medicines().await {
            Ok(medicines) => ApiEvent::InventoryLoaded { medicines },
            Err(err) => ApiEvent::FetchFailed {
                message: err.to_string(),
            },
        },
        ApiCommand::FetchProfile => {
            let username = client.current_user().await.and_then(|p| p.username);
            ApiEvent::ProfileLoaded { username }
        }
        ApiCommand::CreateMedicine { draft } => match client.create_medicine(&draft).await {
            Ok(()) => ApiEvent::CreateSucceeded,
            Err(err) => ApiEvent::CreateFailed {
                message: err.to_string(),
            },
        },
        ApiCommand::UpdateMedicine { id, draft } => {
            match client.update_medicine(id, &draft).await {
                Ok(()) => ApiEvent::UpdateSucceeded,
                Err(err) => ApiEvent::UpdateFailed {
                    message: err.to_string(),
                },
            }
        }
        ApiCommand::DeleteMedicine { id } => match client.delete_medicine(id).await {
            Ok(()) => ApiEvent::DeleteSucceeded,
            Err(err) => ApiEvent::DeleteFailed {
                message: err.to_string(),
            },
        },
    }
}
