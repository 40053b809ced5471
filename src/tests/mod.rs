//! Test doubles shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::dialog::{Callback, DialogRequest, callback};
use crate::platform::{ClipboardWriter, DialogPresenter};

/// Callback that counts how often it ran.
pub fn counter() -> (Arc<AtomicUsize>, Callback) {
    let hits = Arc::new(AtomicUsize::new(0));
    let cb = {
        let hits = Arc::clone(&hits);
        callback(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    (hits, cb)
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Presenter that keeps every request instead of showing it.
#[derive(Default)]
pub struct RecordingPresenter {
    requests: Mutex<Vec<DialogRequest>>,
}

impl RecordingPresenter {
    pub fn requests(&self) -> Vec<DialogRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> DialogRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no dialog was presented")
    }
}

impl DialogPresenter for RecordingPresenter {
    fn present(&self, request: DialogRequest) {
        self.requests.lock().unwrap().push(request);
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) {
        self.writes.lock().unwrap().push(text.to_string());
    }
}
