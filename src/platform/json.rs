use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

use super::DialogPresenter;
use crate::dialog::DialogRequest;
use crate::error::Result;

/// Writes each request as one JSON object per line and selects nothing.
pub struct JsonPresenter<W: Write> {
    out: Mutex<W>,
}

impl JsonPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_request(&self, request: &DialogRequest) -> Result<()> {
        let line = serde_json::to_string(request)?;
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> DialogPresenter for JsonPresenter<W> {
    fn present(&self, request: DialogRequest) {
        match self.write_request(&request) {
            Ok(()) => debug!("Described '{}' as JSON", request.title()),
            Err(err) => warn!("Failed to describe '{}': {err}", request.title()),
        }
    }
}
