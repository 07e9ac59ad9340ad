mod app;
mod error;
mod fixture;
mod paths;
mod terminal;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crossterm::event::EventStream;
use futures::StreamExt;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use app::{DemoApp, Flow};
use error::DemoError;
use fixture::Fixture;
use terminal::TerminalGuard;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), DemoError> {
    init_logging()?;

    let fixture = match std::env::args_os().nth(1) {
        Some(path) => Fixture::load(Path::new(&path))?,
        None => Fixture::sample()?,
    };
    info!(
        "Loaded fixture: {} options, {} rows",
        fixture.options.len(),
        fixture.rows.len()
    );

    let mut app = DemoApp::new(fixture);
    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();

    draw(&mut app, &mut terminal)?;
    while let Some(event) = events.next().await {
        if app.handle(event?) == Flow::Quit {
            break;
        }
        draw(&mut app, &mut terminal)?;
    }

    info!("Shutting down");
    Ok(())
}

fn draw(app: &mut DemoApp, terminal: &mut TerminalGuard) -> Result<(), DemoError> {
    let (width, _) = terminal.size()?;
    let lines = app.render(width);
    terminal.draw(&lines)?;
    Ok(())
}

fn init_logging() -> Result<(), DemoError> {
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("trellis-demo.log"));
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    info!("Logging to {}", path.display());
    Ok(())
}
