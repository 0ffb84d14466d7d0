//! Shell configuration read from a RON file.
//!
//! Command-line flags override the file, which overrides [`HubConfig::default`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use hub_catalog::DataSource;
use hub_core::{DisplayMode, Hub, SortKey};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

const DEFAULT_CONFIG_FILENAME: &str = "hub.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to read config {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub log_destination: LogDestination,
    pub log_level: String,
    pub initial_hub: String,
    pub initial_sort: String,
    pub initial_mode: String,
    /// Directory of replacement collections; the embedded samples otherwise.
    pub data_dir: Option<PathBuf>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            log_destination: LogDestination::default(),
            log_level: "info".to_owned(),
            initial_hub: "discovery".to_owned(),
            initial_sort: "popular".to_owned(),
            initial_mode: "grid".to_owned(),
            data_dir: None,
        }
    }
}

impl HubConfig {
    pub fn level(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(&self.log_level).ok()
    }

    pub fn hub(&self) -> Option<Hub> {
        Hub::parse(&self.initial_hub)
    }

    /// Unknown keys fall through to [`SortKey::Unsorted`].
    pub fn sort(&self) -> SortKey {
        SortKey::parse(&self.initial_sort)
    }

    pub fn mode(&self) -> Option<DisplayMode> {
        DisplayMode::parse(&self.initial_mode)
    }

    pub fn data_source(&self) -> DataSource {
        match &self.data_dir {
            Some(dir) => DataSource::Directory(dir.clone()),
            None => DataSource::Embedded,
        }
    }
}

/// Loads `explicit`, or `./hub.ron` when it exists, or the defaults.
pub fn load(explicit: Option<&Path>) -> Result<HubConfig, ConfigError> {
    match explicit {
        Some(path) => read(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILENAME);
            match read(path) {
                Err(ConfigError::Missing(_)) => Ok(HubConfig::default()),
                other => other,
            }
        }
    }
}

fn read(path: &Path) -> Result<HubConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            ConfigError::Missing(path.to_path_buf())
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    })?;
    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
