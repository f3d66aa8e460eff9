mod app;
mod config;
mod domain;
mod input;
mod logging;
mod notifications;
mod store;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{config_file, init_config, load_settings, Settings};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use ticker::{IntervalTicker, Ticker};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "trakr")]
#[command(about = "A terminal task dashboard with per-task stopwatches and undoable cleanup", long_about = None)]
struct Cli {
    /// Config file to use. Defaults to ~/.trakr/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Where to write logs when RUST_LOG is set. Defaults to ~/.trakr/trakr.log
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// Print the starting dashboard state as JSON
    Snapshot,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = logging::init(cli.log_file.as_deref())? {
        eprintln!("Logging to {}", path.display());
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config_file()?,
    };

    match cli.command {
        Some(Commands::Init) => {
            init_config(&config_path)?;
            println!("Wrote default config: {}", config_path.display());
            Ok(())
        }
        Some(Commands::Snapshot) => {
            let settings = load_settings(&config_path)?;
            let app = AppState::from_settings(&settings);
            let json = serde_json::to_string_pretty(&app.store.snapshot())?;
            println!("{}", json);
            Ok(())
        }
        None => {
            let settings = load_settings(&config_path)?;
            run_tui(&settings)
        }
    }
}

fn run_tui(settings: &Settings) -> Result<()> {
    let mut app = AppState::from_settings(settings);
    let mut ticker = IntervalTicker::new(ticker::tick_duration());
    info!(
        tasks = app.store.tasks().len(),
        theme = settings.theme.name(),
        "starting dashboard"
    );

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let poll_rate = Duration::from_millis(settings.poll_ms.max(1));
    let result = run_app(&mut terminal, &mut app, &mut ticker, poll_rate);

    // Tear down the clock before anything else so no tick lands after exit
    ticker.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        warn!(error = %err, "dashboard exited with error");
    }
    info!("dashboard closed");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    ticker: &mut dyn Ticker,
    poll_rate: Duration,
) -> Result<()> {
    while ticker.is_active() {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Wake up for input, the next clock tick or the next animation frame
        let timeout = ticker.until_next().min(poll_rate);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Tick timers
        app.pump(ticker);
        app.next_frame();
    }
    Ok(())
}
