// src/main.rs

use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    ExecutableCommand,
    event::{self, Event},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::info;

use cyberkit_rs::app::App;
use cyberkit_rs::config::Settings;
use cyberkit_rs::core::dispatcher::ToolContext;
use cyberkit_rs::{handler, logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;
    let settings = Settings::load()?;
    let ctx = Arc::new(ToolContext::new(settings).wrap_err("could not build the HTTP client")?);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting cyberkit-rs.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, ctx).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    info!("Shutting down.");
    result
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, ctx: Arc<ToolContext>) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(ctx, tx);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handler::handle_key(&mut app, key, &mut stdout());
            }
        }

        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
        app.on_tick();
    }
    Ok(())
}
