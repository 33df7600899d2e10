//! Errors raised while reading or writing `config.yml`.

use std::path::PathBuf;

/// Reasons the API base URL, access token and theme settings could not be
/// loaded from or persisted to disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before `load` chose a file
    #[error("No config.yml location has been chosen yet")]
    FilePathNotSet,

    /// No `--config` directory was given and `$HOME` is unknown
    #[error("Cannot locate the home directory for the default config.yml")]
    HomeDirectoryNotFound,

    #[error("Could not read settings from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Could not write settings to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not create settings directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not encode settings as YAML: {0}")]
    SerializationFailed(String),

    /// The file exists but is not a valid settings document, for example a
    /// missing `api_base_url`
    #[error("Invalid settings in config.yml: {0}")]
    DeserializationFailed(String),
}
