//! `addrbook` — terminal address book backed by a local SQLite file.
//!
//! # Usage
//!
//! ```
//! addrbook --db ~/contacts/UserContacts.db
//! addrbook --config ~/.config/addrbook/config.toml
//! ```

mod app;
mod config;
mod form;
mod ui;

use std::{fs::OpenOptions, io, sync::Mutex, time::Duration};

use addrbook_store_sqlite::SqliteStore;
use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::{Args, Settings};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let settings = Settings::resolve(Args::parse())?;

  init_tracing(&settings)?;

  let store = SqliteStore::open(&settings.db_path)
    .await
    .with_context(|| format!("failed to open store at {}", settings.db_path.display()))?;
  tracing::info!(path = %settings.db_path.display(), "address book opened");

  let mut app = App::new(store);
  app.load_contacts().await.context("loading contacts")?;

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  app.store.close();
  run_result
}

/// Send log output to a file so it never lands on the terminal screen.
fn init_tracing(settings: &Settings) -> Result<()> {
  let log = OpenOptions::new()
    .create(true)
    .append(true)
    .open(&settings.log_file)
    .with_context(|| format!("opening log file {}", settings.log_file.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_ansi(false)
    .with_writer(Mutex::new(log))
    .init();
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    match maybe_event {
      Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key).await {
          break;
        }
      }
      // Resize and everything else: the next iteration redraws.
      _ => {}
    }
  }

  Ok(())
}
