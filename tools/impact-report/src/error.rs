//! Error types for the command-line tool.

use std::path::PathBuf;

use impactor_core::ImpactError;
use impactor_store::StoreError;

/// Problems with the tool's `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid impact-report config.
    #[error("{} is not a valid impact-report config: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("cannot encode config: {0}")]
    Encode(#[source] ron::Error),
}

/// Top-level failure of a command.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Impact(#[from] ImpactError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    /// Custom run without a preset is missing a required value.
    #[error("--{0} is required when no --preset is given")]
    MissingArgument(&'static str),

    #[error("no saved run with id '{0}'")]
    RunNotFound(String),

    #[error("nothing to change: give --name, --description, --tag or --clear-tags")]
    NoChanges,
}
