//! Errors raised while loading engines, configs and result files

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid tournament config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("unknown engine `{0}` (expected minimax, positional or random)")]
    UnknownEngine(String),
}

impl TournamentError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &std::path::Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}
