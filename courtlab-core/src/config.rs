//! Optional TOML configuration.
//!
//! A `courtlab.toml` next to the working directory can set the data path and
//! the default chart choices. Missing file or missing keys fall back to
//! defaults; a file that exists but fails to parse is an error so typos are
//! not silently ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::StatColumn;

/// Default league CSV filename looked up in the working directory.
pub const DEFAULT_DATA_FILE: &str = "basketball_stats.csv";

/// Default config filename looked up in the working directory.
pub const CONFIG_FILE: &str = "courtlab.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the league CSV. Overridden by an explicit `--data` flag.
    pub data_path: Option<PathBuf>,

    /// How many teams the leaderboard shows.
    pub top_n: usize,

    /// Default leaderboard metric.
    pub leader_column: StatColumn,

    /// Default scatterplot axes.
    pub scatter_x: StatColumn,
    pub scatter_y: StatColumn,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            top_n: 10,
            leader_column: StatColumn::NcaaChampionships,
            scatter_x: StatColumn::WinPct2023,
            scatter_y: StatColumn::FgPct2023,
        }
    }
}

impl AppConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Load `courtlab.toml` from the working directory if present,
    /// defaults otherwise.
    pub fn discover() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the league CSV path: explicit flag, then config, then the
    /// default filename in the working directory. `None` when nothing
    /// exists; callers decide between demo data and an error.
    pub fn resolve_data_path(&self, flag: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = flag {
            return Some(path.to_path_buf());
        }
        if let Some(path) = &self.data_path {
            return Some(path.clone());
        }
        let default = Path::new(DEFAULT_DATA_FILE);
        default.exists().then(|| default.to_path_buf())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
