use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::ClipboardWriter;
use crate::error::{Error, Result};

/// Clipboard backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardKind {
    /// Operating system clipboard
    #[default]
    System,
    /// Drop every write (for CI and headless hosts)
    Disabled,
}

impl ClipboardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipboardKind::System => "system",
            ClipboardKind::Disabled => "disabled",
        }
    }

    pub fn writer(&self) -> Arc<dyn ClipboardWriter> {
        match self {
            ClipboardKind::System => Arc::new(SystemClipboard::new()),
            ClipboardKind::Disabled => Arc::new(DisabledClipboard),
        }
    }

    /// Writer for a process that exits soon after copying.
    pub fn writer_holding(&self, hold: Duration) -> Arc<dyn ClipboardWriter> {
        match self {
            ClipboardKind::System => Arc::new(SystemClipboard::holding(hold)),
            ClipboardKind::Disabled => Arc::new(DisabledClipboard),
        }
    }
}

impl fmt::Display for ClipboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClipboardKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(ClipboardKind::System),
            "disabled" | "none" | "off" => Ok(ClipboardKind::Disabled),
            _ => Err(Error::InvalidSetting {
                key: "clipboard".to_string(),
                value: s.to_string(),
                allowed: "'system' | 'disabled'".to_string(),
            }),
        }
    }
}

/// System clipboard through `arboard`.
///
/// A fresh handle is opened for every write; handles are not shared across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard {
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep serving each copied text for up to `hold` before returning.
    ///
    /// On Linux the writing process owns the clipboard contents until a
    /// clipboard manager or another application takes them over, so they
    /// vanish when it exits. The write returns early once ownership passes
    /// on. Other platforms ignore `hold`.
    pub fn holding(hold: Duration) -> Self {
        Self { hold: Some(hold) }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) {
        let result = arboard::Clipboard::new()
            .and_then(|mut clipboard| set_text(&mut clipboard, text, self.hold));
        match result {
            Ok(()) => debug!("Copied {} characters to the clipboard", text.chars().count()),
            Err(err) => warn!("Clipboard unavailable: {err}"),
        }
    }
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: Option<Duration>,
) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    match hold {
        Some(hold) => clipboard.set().wait_until(Instant::now() + hold).text(text),
        None => clipboard.set_text(text),
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: Option<Duration>,
) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledClipboard;

impl ClipboardWriter for DisabledClipboard {
    fn write_text(&self, text: &str) {
        info!(
            "Clipboard disabled; dropped {} characters",
            text.chars().count()
        );
    }
}
