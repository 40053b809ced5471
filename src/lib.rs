//! Confirmation and warning dialogs for signer workflows.
//!
//! The [`alerts`] module builds every named dialog and forwards it to a
//! [`platform::DialogPresenter`]. Presentation and clipboard access are
//! injected, so the same helpers drive an interactive terminal, a headless
//! transcript, or a test double.

pub mod alerts;
pub mod cli;
pub mod config;
pub mod dialog;
pub mod error;
pub mod platform;

#[cfg(test)]
mod tests;

pub use alerts::{Alerts, ErrorPreset};
pub use dialog::{ActionKind, Callback, DialogAction, DialogRequest};
