use snafu::Snafu;
use std::path::PathBuf;
use toml::{de::Error as TomlDeError, ser::Error as TomlSerError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid dialog: {message}"))]
    InvalidDialog { message: String },

    #[snafu(display("Invalid value '{value}' for setting '{key}'. Allowed: {allowed}"))]
    InvalidSetting {
        key: String,
        value: String,
        allowed: String,
    },

    #[snafu(display("Failed to read config file '{}': {source}", path.display()))]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse config file '{}': {source}", path.display()))]
    ConfigParse { path: PathBuf, source: TomlDeError },

    #[snafu(display("Failed to render settings: {source}"))]
    ConfigSerialize { source: TomlSerError },

    #[snafu(display("Prompt failed: {message}"))]
    Prompt { message: String },

    #[snafu(display("Dialog worker stopped unexpectedly: {message}"))]
    PresenterJoin { message: String },

    #[snafu(display("Invalid argument: {message}"))]
    InvalidArgument { message: String },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    #[snafu(display("JSON serialization error: {source}"))]
    Json { source: serde_json::Error },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json { source: error }
    }
}

impl Error {
    pub fn invalid_dialog(message: impl Into<String>) -> Self {
        Error::InvalidDialog {
            message: message.into(),
        }
    }
}
