use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::race::RaceSettings;

pub const TICK_MS: &str = "RACE_TICK_MS";
pub const TOP_N: &str = "RACE_TOP_N";
pub const JITTER: &str = "RACE_JITTER";
pub const STRETCH_LIMIT: &str = "RACE_STRETCH_LIMIT";
pub const BAR_HEIGHT: &str = "RACE_BAR_HEIGHT";
pub const BAR_GAP: &str = "RACE_BAR_GAP";
pub const HEIGHT: &str = "RACE_HEIGHT";
pub const DATASET: &str = "RACE_DATASET";
pub const LOG: &str = "CARSTATS_LOG";
pub const LOG_FILE: &str = "CARSTATS_LOG_FILE";

const DEFAULT_LOG_FILE: &str = "carstats.log";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

/// Runtime configuration assembled from `.env` and the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub race: RaceSettings,
    /// CSV to play instead of the bundled dataset.
    pub dataset: Option<PathBuf>,
    /// Log filter directive; logging stays off when unset.
    pub log_filter: Option<String>,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            race: RaceSettings::default(),
            dataset: None,
            log_filter: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Loads `.env` (if present) and reads the configuration from the environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    /// Builds the configuration from any key lookup, falling back to
    /// defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let race = &mut config.race;

        if let Some(ms) = parse_key::<u64, _>(&lookup, TICK_MS)? {
            if ms == 0 {
                return Err(ConfigError::Zero { key: TICK_MS });
            }
            race.tick = Duration::from_millis(ms);
        }
        if let Some(top_n) = parse_key::<usize, _>(&lookup, TOP_N)? {
            if top_n == 0 {
                return Err(ConfigError::Zero { key: TOP_N });
            }
            race.top_n = top_n;
        }
        if let Some(jitter) = parse_non_negative(&lookup, JITTER)? {
            race.jitter = jitter;
        }
        if let Some(value) = lookup(STRETCH_LIMIT) {
            race.layout.stretch_limit = parse_flag(&value).ok_or(ConfigError::Invalid {
                key: STRETCH_LIMIT,
                value,
            })?;
        }
        if let Some(height) = parse_non_negative(&lookup, BAR_HEIGHT)? {
            race.layout.bar_height = height;
        }
        if let Some(gap) = parse_non_negative(&lookup, BAR_GAP)? {
            race.layout.bar_gap = gap;
        }
        if let Some(height) = parse_non_negative(&lookup, HEIGHT)? {
            if height <= 0.0 {
                return Err(ConfigError::Zero { key: HEIGHT });
            }
            race.layout.available_height = height;
        }

        config.dataset = lookup(DATASET)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        config.log_filter = lookup(LOG).filter(|filter| !filter.trim().is_empty());
        if let Some(path) = lookup(LOG_FILE).filter(|path| !path.trim().is_empty()) {
            config.log_file = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn parse_key<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid { key, value })
        })
        .transpose()
}

fn parse_non_negative<F>(lookup: &F, key: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_key::<f64, _>(lookup, key)? {
        Some(value) if !value.is_finite() || value < 0.0 => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
        other => Ok(other),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
