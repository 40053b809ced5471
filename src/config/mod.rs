pub mod loader;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::{ClipboardKind, HeadlessAnswer};

pub use loader::{ENV_CONFIG_PATH, default_config_path, load_settings};

/// Dialog presentation backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PresenterKind {
    /// Interactive terminal selection
    #[default]
    Console,
    /// Print a transcript and answer automatically
    Headless,
    /// Print each dialog as a JSON object
    Json,
}

impl PresenterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenterKind::Console => "console",
            PresenterKind::Headless => "headless",
            PresenterKind::Json => "json",
        }
    }
}

impl fmt::Display for PresenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresenterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "console" | "tty" => Ok(PresenterKind::Console),
            "headless" => Ok(PresenterKind::Headless),
            "json" => Ok(PresenterKind::Json),
            _ => Err(Error::InvalidSetting {
                key: "presenter".to_string(),
                value: s.to_string(),
                allowed: "'console' | 'headless' | 'json'".to_string(),
            }),
        }
    }
}

/// Effective runtime settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub presenter: PresenterKind,
    /// Only consulted by the headless presenter.
    pub answer: HeadlessAnswer,
    pub clipboard: ClipboardKind,
}

impl Settings {
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|source| Error::ConfigSerialize { source })
    }
}
