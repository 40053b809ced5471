//! Named confirmation and warning dialogs for signer workflows.
//!
//! [`Alerts`] builds each dialog with [`requests`] and hands it straight to
//! the injected presenter. None of the methods return anything or fail; the
//! outcome reaches the caller only through the callbacks it supplied.

pub mod requests;

use std::sync::Arc;

use log::debug;
use secrecy::SecretString;

use crate::dialog::{DialogRequest, callback};
use crate::platform::{ClipboardWriter, DialogPresenter};

pub use requests::ErrorPreset;

pub struct Alerts<P> {
    presenter: P,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl<P: DialogPresenter> Alerts<P> {
    pub fn new(presenter: P, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self {
            presenter,
            clipboard,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn show(&self, request: DialogRequest) {
        debug!(
            "Presenting '{}' with {} action(s)",
            request.title(),
            request.actions().len()
        );
        self.presenter.present(request);
    }

    pub fn notify_error(&self, message: &str, dismiss_label: &str) {
        self.show(requests::error(message, dismiss_label));
    }

    pub fn notify_preset(&self, preset: ErrorPreset) {
        self.show(requests::error_preset(preset));
    }

    pub fn notify_identity_creation_error(&self) {
        self.notify_preset(ErrorPreset::IdentityCreation);
    }

    pub fn notify_path_derivation_error(&self) {
        self.notify_preset(ErrorPreset::PathDerivation);
    }

    pub fn notify_path_deletion_error(&self) {
        self.notify_preset(ErrorPreset::PathDeletion);
    }

    pub fn notify_identity_deletion_error(&self) {
        self.notify_preset(ErrorPreset::IdentityDeletion);
    }

    pub fn confirm_destructive<F>(
        &self,
        title: &str,
        body: &str,
        confirm_label: &str,
        on_confirm: F,
    ) where
        F: Fn() + Send + Sync + 'static,
    {
        self.show(requests::destructive(
            title,
            body,
            confirm_label,
            callback(on_confirm),
        ));
    }

    pub fn confirm_delete_account<F>(&self, account_name: &str, on_delete: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.show(requests::delete_account(account_name, callback(on_delete)));
    }

    pub fn confirm_delete_legacy_account<F>(&self, account_name: &str, on_delete: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.show(requests::delete_legacy_account(account_name, callback(on_delete)));
    }

    pub fn confirm_delete_identity<F>(&self, on_delete: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.show(requests::delete_identity(callback(on_delete)));
    }

    /// Offer to copy a recovery phrase after warning against digital storage.
    pub fn confirm_copy_secret(&self, secret: impl Into<String>) {
        self.show(requests::copy_secret(into_secret(secret), Arc::clone(&self.clipboard)));
    }

    /// [`confirm_copy_secret`](Self::confirm_copy_secret) that also reports
    /// the copy through `on_copied`.
    pub fn confirm_copy_secret_then<F>(&self, secret: impl Into<String>, on_copied: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.show(requests::copy_secret_then(
            into_secret(secret),
            Arc::clone(&self.clipboard),
            Some(callback(on_copied)),
        ));
    }

    pub fn confirm_risk<F>(&self, message: &str, on_acknowledge: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.show(requests::risk(message, callback(on_acknowledge)));
    }

    pub fn confirm_multipart_unsupported<F>(&self, on_proceed: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.show(requests::multipart_unsupported(callback(on_proceed)));
    }

    pub fn notify_decode_failure(&self) {
        self.show(requests::decode_failure());
    }

    pub fn confirm_backup_recorded<F>(&self, on_proceed: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.show(requests::backup_recorded(callback(on_proceed)));
    }
}

fn into_secret(secret: impl Into<String>) -> SecretString {
    let secret: String = secret.into();
    SecretString::new(secret.into())
}
