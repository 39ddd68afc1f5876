use clap::Parser;

use carstats::config;

#[derive(Debug, Parser)]
#[command(name = "carstats", version, about = "CarStats dashboard")]
pub struct CliArgs {
    /// Print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// With --headless, print the brand output race instead of the stats
    #[arg(long)]
    pub race: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Play a different `year,brand,value` CSV
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<String>,

    /// Milliseconds per race tick
    #[arg(long = "tick-ms", value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Number of bars shown at once
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Let a short list of bars fill the whole chart height
    #[arg(long = "no-stretch-limit")]
    pub no_stretch_limit: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.dataset {
            std::env::set_var(config::DATASET, path);
        }
        if let Some(ms) = self.tick_ms {
            std::env::set_var(config::TICK_MS, ms.to_string());
        }
        if let Some(top) = self.top {
            std::env::set_var(config::TOP_N, top.to_string());
        }
        if self.no_stretch_limit {
            std::env::set_var(config::STRETCH_LIMIT, "off");
        }
        if self.debug && std::env::var(config::LOG).is_err() {
            std::env::set_var(config::LOG, "debug");
        }
    }
}
