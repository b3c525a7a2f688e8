//! Worker round trips: commands in over the tokio channel, replies out
//! over the UI event channel, one reply per command.

mod common;

use std::sync::mpsc;
use std::time::Duration;

use common::mock_api::{MockApi, MockResponse};
use pharmadash::api::{worker, ApiCommand, MedicineDraft};
use pharmadash::config::ApiConfig;
use pharmadash::ui::events::{ApiEvent, AppEvent};

fn client_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        auth_token: None,
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

fn recv_api_event(rx: &mpsc::Receiver<AppEvent>) -> ApiEvent {
    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(AppEvent::Api(event)) => event,
        other => panic!("expected an API reply, got {:?}", other),
    }
}

#[test]
fn fetch_round_trip_delivers_inventory() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mock = rt.block_on(MockApi::start());
    rt.block_on(mock.enqueue(MockResponse::json(
        r#"{"results": [{"id": 1, "name": "Aspirin"}]}"#,
    )));

    let (events_tx, events_rx) = mpsc::channel();
    let api_tx = worker::spawn(client_config(&mock.base_url()), events_tx);

    api_tx.try_send(ApiCommand::FetchInventory).unwrap();
    match recv_api_event(&events_rx) {
        ApiEvent::InventoryLoaded { medicines } => {
            assert_eq!(medicines.len(), 1);
            assert_eq!(medicines[0].name, "Aspirin");
        }
        other => panic!("expected inventory, got {:?}", other),
    }
}

#[test]
fn failed_fetch_delivers_the_message() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mock = rt.block_on(MockApi::start());
    rt.block_on(mock.enqueue(MockResponse::error(500, "database unavailable")));

    let (events_tx, events_rx) = mpsc::channel();
    let api_tx = worker::spawn(client_config(&mock.base_url()), events_tx);

    api_tx.try_send(ApiCommand::FetchInventory).unwrap();
    match recv_api_event(&events_rx) {
        ApiEvent::FetchFailed { message } => assert_eq!(message, "database unavailable"),
        other => panic!("expected fetch failure, got {:?}", other),
    }
}

/// Commands are handled strictly in order, one reply each.
#[test]
fn commands_settle_in_dispatch_order() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mock = rt.block_on(MockApi::start());
    rt.block_on(mock.enqueue(MockResponse::default()));
    rt.block_on(mock.enqueue(MockResponse::json("[]")));

    let (events_tx, events_rx) = mpsc::channel();
    let api_tx = worker::spawn(client_config(&mock.base_url()), events_tx);

    let draft = MedicineDraft {
        name: Some("Aspirin".to_string()),
        ..MedicineDraft::default()
    };
    api_tx.try_send(ApiCommand::CreateMedicine { draft }).unwrap();
    api_tx.try_send(ApiCommand::FetchInventory).unwrap();

    assert!(matches!(
        recv_api_event(&events_rx),
        ApiEvent::CreateSucceeded
    ));
    assert!(matches!(
        recv_api_event(&events_rx),
        ApiEvent::InventoryLoaded { .. }
    ));
}

#[test]
fn profile_round_trip_delivers_username() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mock = rt.block_on(MockApi::start());
    rt.block_on(mock.enqueue(MockResponse::json(r#"{"username": "alice"}"#)));

    let (events_tx, events_rx) = mpsc::channel();
    let api_tx = worker::spawn(client_config(&mock.base_url()), events_tx);

    api_tx.try_send(ApiCommand::FetchProfile).unwrap();
    match recv_api_event(&events_rx) {
        ApiEvent::ProfileLoaded { username } => assert_eq!(username.as_deref(), Some("alice")),
        other => panic!("expected profile, got {:?}", other),
    }
}
