use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event;
use ratatui::DefaultTerminal;

use platepal::app::App;
use platepal::config;
use platepal::location::Coordinate;
use platepal::worker;

/// How long one tick waits for input before draining worker responses
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Find restaurants matching your dietary preferences from the terminal
#[derive(Debug, Parser)]
#[command(name = "platepal", version, about)]
struct Args {
    /// Path to the config file (default: ~/.config/platepal/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed the dietary preference text, comma-separated
    #[arg(long, value_name = "PREFS")]
    prefs: Option<String>,

    /// Preset latitude (requires --longitude)
    #[arg(long, value_name = "DEG")]
    latitude: Option<f64>,

    /// Preset longitude (requires --latitude)
    #[arg(long, value_name = "DEG")]
    longitude: Option<f64>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging stays off in release builds; a TUI owns the terminal
    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Args::parse();

    let coordinate = match (args.latitude, args.longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinate {
            latitude,
            longitude,
        }),
        (None, None) => None,
        _ => return Err(eyre!("--latitude and --longitude must be given together")),
    };

    let config = config::load(args.config.as_deref())?;

    let mut app = App::new(&config);
    if let Some(prefs) = args.prefs.as_deref() {
        app.prefs.set_text(prefs);
    }
    if let Some(coordinate) = coordinate {
        app.set_location(coordinate);
    }

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    worker::spawn_worker(&config, request_rx, response_tx);
    app.set_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        // Wait briefly for input, then drain worker responses
        if event::poll(TICK_INTERVAL)? {
            app.handle_events()?;
        }
        app.poll_worker();
    }

    Ok(())
}
