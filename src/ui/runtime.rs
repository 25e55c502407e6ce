//! The draw/event loop.

use std::io;
use std::time::Duration;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(mut app: App, events: EventHandler, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw call picks up the new size on its own.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api(reply)) => app.on_api_reply(reply),
            Ok(AppEvent::SessionExpired) => app.on_session_expired(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
