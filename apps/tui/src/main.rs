mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use app::App;
use carstats::config::{init_app_config, AppConfig};
use carstats::race::Series;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use std::io::IsTerminal;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config()?;

    let headless = args.headless || !is_terminal();
    let log_target = if headless {
        logging::LogTarget::Stderr
    } else {
        logging::LogTarget::File
    };
    logging::init(&config, log_target)?;

    let series = load_series(&config)?;

    if headless {
        let mode = if args.race {
            event::HeadlessMode::Race
        } else {
            event::HeadlessMode::Stats
        };
        return event::run_headless(series, config.race, mode, args.json);
    }

    let mut app = App::new(series, config.race);

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

fn load_series(config: &AppConfig) -> Result<Series> {
    let series = match &config.dataset {
        Some(path) => Series::load(path)?,
        None => Series::embedded(),
    };
    if series.is_empty() {
        tracing::warn!("race dataset has no usable rows");
    }
    Ok(series)
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}
