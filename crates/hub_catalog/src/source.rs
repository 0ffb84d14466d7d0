use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const EMBEDDED_CATEGORIES: &str = include_str!("../data/categories.ron");
const EMBEDDED_GAMES: &str = include_str!("../data/games.ron");
const EMBEDDED_SPACES: &str = include_str!("../data/spaces.ron");
const EMBEDDED_EVENTS: &str = include_str!("../data/events.ron");
const EMBEDDED_FRIENDS: &str = include_str!("../data/friends.ron");
const EMBEDDED_PROFILE: &str = include_str!("../data/profile.ron");

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("collection file missing: {}", .0.display())]
    Missing(PathBuf),
    #[error("io error reading {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Where the startup collections come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Sample collections compiled into the binary.
    #[default]
    Embedded,
    /// A directory holding `games.ron`, `categories.ron`, ... with the same layout.
    Directory(PathBuf),
}

impl DataSource {
    /// Raw RON text of the collection stored under `{name}.ron`.
    pub fn read(&self, name: &str) -> Result<String, SourceError> {
        match self {
            DataSource::Embedded => embedded(name)
                .map(str::to_owned)
                .ok_or_else(|| SourceError::Missing(PathBuf::from(format!("{name}.ron")))),
            DataSource::Directory(dir) => read_file(&dir.join(format!("{name}.ron"))),
        }
    }
}

fn embedded(name: &str) -> Option<&'static str> {
    match name {
        "categories" => Some(EMBEDDED_CATEGORIES),
        "games" => Some(EMBEDDED_GAMES),
        "spaces" => Some(EMBEDDED_SPACES),
        "events" => Some(EMBEDDED_EVENTS),
        "friends" => Some(EMBEDDED_FRIENDS),
        "profile" => Some(EMBEDDED_PROFILE),
        _ => None,
    }
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            SourceError::Missing(path.to_path_buf())
        } else {
            SourceError::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    })
}
