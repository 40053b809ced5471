//! Presentation and clipboard capabilities.
//!
//! The alert helpers never render anything themselves. They hand a
//! [`DialogRequest`] to a [`DialogPresenter`] and, for the copy dialog, wire a
//! button to a [`ClipboardWriter`].

pub mod clipboard;
pub mod console;
pub mod headless;
pub mod json;

use std::sync::Arc;

use crate::dialog::DialogRequest;

pub use clipboard::{ClipboardKind, DisabledClipboard, SystemClipboard};
pub use console::ConsolePresenter;
pub use headless::{HeadlessAnswer, HeadlessPresenter};
pub use json::JsonPresenter;

/// Shows a dialog and runs the callback of whichever action the user picks.
///
/// Implementations invoke at most one callback, exactly once. Dismissing the
/// dialog without a choice invokes none.
pub trait DialogPresenter {
    fn present(&self, request: DialogRequest);
}

impl<T: DialogPresenter + ?Sized> DialogPresenter for &T {
    fn present(&self, request: DialogRequest) {
        (**self).present(request)
    }
}

impl<T: DialogPresenter + ?Sized> DialogPresenter for Box<T> {
    fn present(&self, request: DialogRequest) {
        (**self).present(request)
    }
}

impl<T: DialogPresenter + ?Sized> DialogPresenter for Arc<T> {
    fn present(&self, request: DialogRequest) {
        (**self).present(request)
    }
}

/// Replaces the system clipboard contents. Failures stay inside the backend.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str);
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for Arc<T> {
    fn write_text(&self, text: &str) {
        (**self).write_text(text)
    }
}
