//! Pipeline configuration.
//!
//! Every setting has a default matching the layout of the NFL player stats
//! dump, so the cleaner runs without a config file. A TOML file can override
//! any subset:
//!
//! ```toml
//! reference_date = "2017-12-04"
//!
//! [paths]
//! games = "data/games.json"
//! profiles = "data/profiles.json"
//! output = "data/training_data.csv"
//!
//! [output]
//! index_label = "index"
//! ```
//!
//! `reference_date` must be a quoted `YYYY-MM-DD` string.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CleanError, CleanResult};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "NFL_CLEANER_CONFIG";

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "cleaner.toml";

/// Full pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanConfig {
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub output: OutputSettings,
    /// Date `current_age` is measured at; today when unset.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    #[serde(default = "default_games_path")]
    pub games: PathBuf,
    #[serde(default = "default_profiles_path")]
    pub profiles: PathBuf,
    #[serde(default = "default_output_path")]
    pub output: PathBuf,
}

/// CSV output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Header of the leading row-index column. Must not name an input
    /// column, otherwise the run fails with a schema error.
    #[serde(default = "default_index_label")]
    pub index_label: String,
}

fn default_games_path() -> PathBuf {
    PathBuf::from("nfl-football-player-stats/games_1512362753.8735218.json")
}

fn default_profiles_path() -> PathBuf {
    PathBuf::from("nfl-football-player-stats/profiles_1512362725.022629.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("nfl-football-player-stats/training_data.csv")
}

fn default_index_label() -> String {
    "index".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            games: default_games_path(),
            profiles: default_profiles_path(),
            output: default_output_path(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            index_label: default_index_label(),
        }
    }
}

impl CleanConfig {
    /// Configuration for explicit input and output paths.
    pub fn with_paths(
        games: impl Into<PathBuf>,
        profiles: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            paths: PathSettings {
                games: games.into(),
                profiles: profiles.into(),
                output: output.into(),
            },
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(CleanConfig)` if successful
    /// * `Err(CleanError::Config)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> CleanResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CleanError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> CleanResult<Self> {
        toml::from_str(content)
            .map_err(|e| CleanError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Resolve the configuration for a run.
    ///
    /// Uses, in order:
    /// 1. the file named by `$NFL_CLEANER_CONFIG`
    /// 2. `cleaner.toml` in the current directory
    /// 3. the built-in defaults
    pub fn load() -> CleanResult<Self> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            log::debug!("Using config file from {}: {}", CONFIG_ENV_VAR, path);
            return Self::from_file(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            log::debug!("Using config file {}", local.display());
            return Self::from_file(local);
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Date used for `current_age`
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
