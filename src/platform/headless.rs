use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use clap::ValueEnum;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::DialogPresenter;
use crate::dialog::DialogRequest;
use crate::error::{Error, Result};

/// Choice a non-interactive presenter makes on the user's behalf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HeadlessAnswer {
    /// Pick the first non-cancel action
    Accept,
    /// Pick the action an interactive prompt would pre-select
    #[default]
    Decline,
    /// Close the dialog without picking anything
    Dismiss,
}

impl HeadlessAnswer {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadlessAnswer::Accept => "accept",
            HeadlessAnswer::Decline => "decline",
            HeadlessAnswer::Dismiss => "dismiss",
        }
    }

    /// Index of the action this answer selects in `request`.
    pub fn pick(&self, request: &DialogRequest) -> Option<usize> {
        match self {
            HeadlessAnswer::Accept => request.primary_index().or_else(|| request.cancel_index()),
            HeadlessAnswer::Decline => Some(request.safe_default_index()),
            HeadlessAnswer::Dismiss => None,
        }
    }
}

impl fmt::Display for HeadlessAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeadlessAnswer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "accept" | "yes" => Ok(HeadlessAnswer::Accept),
            "decline" | "no" => Ok(HeadlessAnswer::Decline),
            "dismiss" => Ok(HeadlessAnswer::Dismiss),
            _ => Err(Error::InvalidSetting {
                key: "answer".to_string(),
                value: s.to_string(),
                allowed: "'accept' | 'decline' | 'dismiss'".to_string(),
            }),
        }
    }
}

/// Presenter for non-interactive runs.
///
/// Writes a plain-text transcript of every dialog and answers it according
/// to a fixed [`HeadlessAnswer`].
pub struct HeadlessPresenter<W: Write> {
    answer: HeadlessAnswer,
    out: Mutex<W>,
}

impl HeadlessPresenter<io::Stdout> {
    pub fn stdout(answer: HeadlessAnswer) -> Self {
        Self::new(answer, io::stdout())
    }
}

impl<W: Write> HeadlessPresenter<W> {
    pub fn new(answer: HeadlessAnswer, out: W) -> Self {
        Self {
            answer,
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_transcript(&self, request: &DialogRequest, picked: Option<usize>) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "== {} ==", request.title())?;
        writeln!(out, "{}", request.body())?;
        for action in request.actions() {
            writeln!(out, "  [{}] {}", action.kind(), action.label())?;
        }
        match picked.and_then(|index| request.actions().get(index)) {
            Some(action) => writeln!(out, "-> {}", action.label())?,
            None => writeln!(out, "-> (dismissed)")?,
        }
        out.flush()
    }
}

impl<W: Write> DialogPresenter for HeadlessPresenter<W> {
    fn present(&self, request: DialogRequest) {
        let picked = self.answer.pick(&request);
        if let Err(err) = self.write_transcript(&request, picked) {
            warn!("Failed to write dialog transcript: {err}");
        }

        match picked {
            Some(index) => {
                info!(
                    "Answering '{}' with '{}' ({})",
                    request.title(),
                    request.actions()[index].label(),
                    self.answer
                );
                request.choose(index);
            }
            None => info!("Dismissing '{}' without a choice", request.title()),
        }
    }
}
