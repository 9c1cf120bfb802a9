use crate::config::Config;
use crate::github::UsersClient;
use crate::ui::app::{App, Fetcher};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::TerminalSession;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive UI until the user quits or a shutdown signal arrives.
///
/// The loop runs on the calling thread; fetches and the signal listener run
/// on `runtime`.
pub fn run(config: &Config, client: UsersClient, runtime: Handle) -> io::Result<()> {
    let mut terminal = TerminalSession::enter()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    spawn_signal_listener(&runtime, events.sender());

    let mut app = App::new(config, events.sender());
    app.attach_fetcher(Fetcher::new(runtime, client));
    app.start();
    tracing::info!(demo = app.demo().name(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Fetch(intent)) => app.on_fetch_event(intent),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if !app.should_quit() {
        app.request_quit();
    }
    drop(terminal);
    tracing::info!("UI stopped");
    Ok(())
}

/// Forward SIGINT/SIGTERM as `AppEvent::Shutdown`.
fn spawn_signal_listener(runtime: &Handle, events: Sender<AppEvent>) {
    runtime.spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut term = match signal(SignalKind::terminate()) {
                Ok(term) => term,
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                    return;
                }
            };
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = term.recv() => {}
            }
        }
        #[cfg(not(unix))]
        {
            let _ = tokio::signal::ctrl_c().await;
        }
        tracing::info!("Shutdown signal received");
        let _ = events.send(AppEvent::Shutdown);
    });
}
