//! Terminal frontend for Strictly Tic-Tac-Toe.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use strictly_tictactoe::{GameConfig, GameEngine, Seat};
use terminal::TerminalGuard;
use tracing::{error, info, instrument};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // The terminal belongs to the UI; logs go to a file.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,strictly_tictactoe=debug")
            }),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    info!(?config, "Starting Strictly Tic-Tac-Toe");

    let mut engine = GameEngine::with_config(config);
    if let Some(name) = &cli.player_one {
        engine.set_player_name(Seat::One, name.as_str());
    }
    if let Some(name) = &cli.player_two {
        engine.set_player_name(Seat::Two, name.as_str());
    }
    engine.set_player_one_mark(cli.player_one_mark);
    let mut app = App::new(engine);

    let _guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run(&mut terminal, &mut app);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// Event loop: redraw after input or when the engine publishes a change.
#[instrument(skip_all)]
fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|f| ui::draw(f, app))?;

    while !app.should_quit() {
        let mut dirty = false;
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                    dirty = true;
                }
            }
        }
        dirty |= app.sync();

        if dirty && !app.should_quit() {
            terminal.draw(|f| ui::draw(f, app))?;
        }
    }
    Ok(())
}
