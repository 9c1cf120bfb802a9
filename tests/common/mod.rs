//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hooklab::config::Config;
use hooklab::github::UsersClient;
use hooklab::ui::app::{App, Demo, Fetcher};
use hooklab::ui::events::{AppEvent, EventHandler};
use hooklab::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::net::TcpListener;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

/// App on the default config, started on `demo`, with a detached event channel.
pub fn make_app(demo: Demo) -> (App, EventHandler) {
    let mut config = Config::default();
    config.ui.initial_demo = demo.name().to_string();
    let events = EventHandler::detached();
    let mut app = App::new(&config, events.sender());
    app.start();
    (app, events)
}

/// App started on the fetch demo, fetching from `users_url` on the current runtime.
pub fn make_fetch_app(users_url: &str) -> (App, EventHandler) {
    let mut config = Config::default();
    config.github.users_url = users_url.to_string();
    config.ui.initial_demo = Demo::Fetch.name().to_string();
    let events = EventHandler::detached();
    let mut app = App::new(&config, events.sender());
    let client = UsersClient::new(&config.github).expect("client");
    app.attach_fetcher(Fetcher::new(tokio::runtime::Handle::current(), client));
    app.start();
    (app, events)
}

/// Wait for the next fetch completion and apply it to `app`.
pub fn pump_fetch(app: &mut App, events: &EventHandler, timeout: Duration) -> bool {
    match events.next(timeout) {
        Ok(AppEvent::Fetch(intent)) => {
            app.on_fetch_event(intent);
            true
        }
        _ => false,
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Draw `app` into an in-memory terminal and return the screen as text,
/// one line per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

// -- Log capture ----------------------------------------------------------------

/// In-memory sink for a `tracing_subscriber::fmt` subscriber.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Install a debug-level subscriber writing here, for the current thread
    /// and everything spawned while the guard is alive.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Body rows of the fetch demo below the "Hello Fetch" heading, with
/// borders and padding stripped and blank rows dropped.
pub fn fetch_rows(screen: &str) -> Vec<String> {
    screen
        .lines()
        .skip_while(|line| !line.contains("Hello Fetch"))
        .skip(1)
        .take_while(|line| !line.contains('└'))
        .map(|line| line.trim_matches(|c: char| c == '│' || c.is_whitespace()).to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
