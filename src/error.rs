use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the edges of the calculator: key input and configuration.
///
/// The reducer itself is total and never fails.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("unknown key: {0:?}")]
    UnknownKey(String),

    #[error("no keypad button labelled {0:?}")]
    UnknownButton(String),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config")]
    ConfigSerialize(#[from] toml::ser::Error),
}
