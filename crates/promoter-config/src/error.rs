use std::path::PathBuf;

use promoter_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to read settings at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings at '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<ConfigError>,
    },

    #[error("invalid promotion level")]
    InvalidLevel(#[from] CoreError),
}
