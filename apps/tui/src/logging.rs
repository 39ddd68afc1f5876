use color_eyre::Result;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use carstats::config::AppConfig;

/// Where log lines go when logging is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The terminal UI owns stdout/stderr, so logs go to a file.
    File,
    Stderr,
}

/// Installs the global subscriber when a log filter is configured.
pub fn init(config: &AppConfig, target: LogTarget) -> Result<()> {
    let Some(filter) = config.log_filter.as_deref() else {
        return Ok(());
    };
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| color_eyre::eyre::eyre!("Invalid log filter {filter:?}: {e}"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match target {
        LogTarget::File => {
            let file = File::create(&config.log_file)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };

    if let Err(e) = installed {
        return Err(color_eyre::eyre::eyre!("Failed to install logger: {e}"));
    }

    tracing::debug!(log_file = %config.log_file.display(), "logging enabled");
    Ok(())
}
