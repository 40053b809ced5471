use crate::config::{PresenterKind, Settings};
use crate::error::{Error, Result};
use crate::platform::{ClipboardKind, HeadlessAnswer};
use log::{debug, info};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "SIGNER_ALERTS_CONFIG";
const ENV_PRESENTER: &str = "SIGNER_ALERTS_PRESENTER";
const ENV_ANSWER: &str = "SIGNER_ALERTS_ANSWER";
const ENV_CLIPBOARD: &str = "SIGNER_ALERTS_CLIPBOARD";

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Config file location when no explicit path is given.
pub fn default_config_path() -> PathBuf {
    default_config_path_from(&env_value)
}

fn default_config_path_from(get: &dyn Fn(&str) -> Option<String>) -> PathBuf {
    get(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .or_else(|| {
            directories::BaseDirs::new().map(|base_dirs| {
                base_dirs
                    .home_dir()
                    .join(".config")
                    .join("signer-alerts")
                    .join("config.toml")
            })
        })
        .unwrap_or_else(|| {
            // Fallback to current directory
            env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("signer-alerts.toml")
        })
}

/// Load settings from the config file and environment overrides.
///
/// A missing file is not an error; defaults are used instead.
pub fn load_settings(path: Option<PathBuf>) -> Result<Settings> {
    load_settings_from_source(path, &env_value)
}

fn load_settings_from_source(
    path: Option<PathBuf>,
    get: &dyn Fn(&str) -> Option<String>,
) -> Result<Settings> {
    let path = path.unwrap_or_else(|| default_config_path_from(get));
    let mut settings = read_settings_file(&path)?;
    apply_env_overrides(&mut settings, get)?;
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No config file at '{}', using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(Error::ConfigIo {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&raw).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_overrides(
    settings: &mut Settings,
    get: &dyn Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(raw) = get(ENV_PRESENTER) {
        settings.presenter = raw.parse::<PresenterKind>()?;
        info!("{ENV_PRESENTER} overrides presenter: {}", settings.presenter);
    }
    if let Some(raw) = get(ENV_ANSWER) {
        settings.answer = raw.parse::<HeadlessAnswer>()?;
        info!("{ENV_ANSWER} overrides answer: {}", settings.answer);
    }
    if let Some(raw) = get(ENV_CLIPBOARD) {
        settings.clipboard = raw.parse::<ClipboardKind>()?;
        info!("{ENV_CLIPBOARD} overrides clipboard: {}", settings.clipboard);
    }
    Ok(())
}
