use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::api::worker;
use crate::config::Config;
use crate::session::Session;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// The blocking UI loop. Returns when the user quits.
pub fn run(config: Config, session: Session) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let events = EventHandler::new(tick_rate);

    let api_tx = worker::spawn(config.api, events.sender());
    let mut app = App::new(session);
    app.set_api_sender(api_tx);

    // Initial load: the inventory, and the profile for the greeting.
    app.refresh_inventory();
    app.request_profile();
    tracing::info!("dashboard started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Api(event)) => app.on_api_event(event),
            // Resize and tick just trigger the redraw above.
            Ok(AppEvent::Resize(_, _)) | Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
