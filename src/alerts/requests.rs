//! Pure builders for every named dialog.
//!
//! Each function returns the [`DialogRequest`] that the matching
//! [`Alerts`](super::Alerts) method presents.

use std::sync::Arc;

use clap::ValueEnum;
use secrecy::{ExposeSecret, SecretString};

use crate::dialog::{Callback, DialogAction, DialogRequest, callback};
use crate::platform::ClipboardWriter;

pub const ERROR_TITLE: &str = "Error";
pub const TRY_AGAIN: &str = "Try again";
pub const CANCEL: &str = "Cancel";
pub const DELETE: &str = "Delete";

pub const DELETE_ACCOUNT_TITLE: &str = "Delete Account";
pub const DELETE_IDENTITY_TITLE: &str = "Delete Identity";
pub const RECOVERY_PHRASE_CAVEAT: &str =
    "The account can only be recovered with its associated recovery phrase.";
const DELETE_IDENTITY_BODY: &str = "Do you really want to delete this Identity and all the related accounts?\nThis identity can only be recovered with its associated recovery phrase.";

pub const COPY_SECRET_TITLE: &str = "Write this recovery phrase on paper";
const COPY_SECRET_BODY: &str = "It is not recommended to transfer or store a recovery phrase digitally and unencrypted. Anyone in possession of this recovery phrase is able to spend funds from this account.";
pub const COPY_ANYWAY: &str = "Copy anyway";

pub const RISK_TITLE: &str = "Warning";
pub const ACKNOWLEDGE_RISKS: &str = "I understand the risks";
pub const BACK: &str = "Back";
pub const MULTIPART_MESSAGE: &str = "The payload of the transaction you are signing is too big to be decoded. Not seeing what you are signing is inherently unsafe. If possible, contact the developer of the application generating the transaction to ask for multipart support.";

pub const DECODE_FAILURE_TITLE: &str = "Could not decode method with available metadata.";
const DECODE_FAILURE_BODY: &str = "Signing something you do not understand is inherently unsafe. Do not sign this extrinsic unless you know what you are doing, or update Parity Signer to be able to decode this message. If you are not sure, or you are using the latest version, please open an issue on github.com/paritytech/parity-signer.";
pub const OKAY: &str = "Okay";

pub const BACKUP_TITLE: &str = "Important";
const BACKUP_BODY: &str = "Make sure you've backed up this recovery phrase. It is the only way to restore your account in case of device failure/lost.";
pub const PROCEED: &str = "Proceed";

/// Canned error notifications, all dismissed with "Try again".
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorPreset {
    /// Identity could not be created from the seed
    IdentityCreation,
    /// Account path could not be derived from the seed
    PathDerivation,
    /// Account could not be deleted
    PathDeletion,
    /// Identity could not be deleted
    IdentityDeletion,
}

impl ErrorPreset {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorPreset::IdentityCreation => "Can't create Identity from the seed",
            ErrorPreset::PathDerivation => "Can't derive account from the seed",
            ErrorPreset::PathDeletion => "Can't delete this account.",
            ErrorPreset::IdentityDeletion => "Can't delete Identity.",
        }
    }
}

pub fn error(message: &str, dismiss_label: &str) -> DialogRequest {
    DialogRequest::single(ERROR_TITLE, message, DialogAction::cancel(dismiss_label))
}

pub fn error_preset(preset: ErrorPreset) -> DialogRequest {
    error(preset.message(), TRY_AGAIN)
}

/// Destructive confirm button followed by a plain "Cancel".
pub fn destructive(
    title: &str,
    body: &str,
    confirm_label: &str,
    on_confirm: Callback,
) -> DialogRequest {
    DialogRequest::with_cancel(
        title,
        body,
        DialogAction::destructive(confirm_label, on_confirm),
        CANCEL,
    )
}

fn delete_account_body(account_name: &str) -> String {
    format!("Do you really want to delete {account_name}?")
}

pub fn delete_account(account_name: &str, on_delete: Callback) -> DialogRequest {
    destructive(
        DELETE_ACCOUNT_TITLE,
        &delete_account_body(account_name),
        DELETE,
        on_delete,
    )
}

pub fn delete_legacy_account(account_name: &str, on_delete: Callback) -> DialogRequest {
    let body = format!(
        "{}\n{RECOVERY_PHRASE_CAVEAT}",
        delete_account_body(account_name)
    );
    destructive(DELETE_ACCOUNT_TITLE, &body, DELETE, on_delete)
}

pub fn delete_identity(on_delete: Callback) -> DialogRequest {
    destructive(DELETE_IDENTITY_TITLE, DELETE_IDENTITY_BODY, DELETE, on_delete)
}

/// Warn before copying a recovery phrase; "Copy anyway" writes it to `clipboard`.
pub fn copy_secret(secret: SecretString, clipboard: Arc<dyn ClipboardWriter>) -> DialogRequest {
    copy_secret_then(secret, clipboard, None)
}

/// Like [`copy_secret`], running `on_copied` after the phrase was written.
pub fn copy_secret_then(
    secret: SecretString,
    clipboard: Arc<dyn ClipboardWriter>,
    on_copied: Option<Callback>,
) -> DialogRequest {
    let on_copy = callback(move || {
        clipboard.write_text(secret.expose_secret());
        if let Some(on_copied) = &on_copied {
            on_copied();
        }
    });
    DialogRequest::with_cancel(
        COPY_SECRET_TITLE,
        COPY_SECRET_BODY,
        DialogAction::default_with(COPY_ANYWAY, on_copy),
        CANCEL,
    )
}

pub fn risk(message: &str, on_acknowledge: Callback) -> DialogRequest {
    DialogRequest::with_cancel(
        RISK_TITLE,
        message,
        DialogAction::default_with(ACKNOWLEDGE_RISKS, on_acknowledge),
        BACK,
    )
}

pub fn multipart_unsupported(on_proceed: Callback) -> DialogRequest {
    risk(MULTIPART_MESSAGE, on_proceed)
}

pub fn decode_failure() -> DialogRequest {
    DialogRequest::single(
        DECODE_FAILURE_TITLE,
        DECODE_FAILURE_BODY,
        DialogAction::acknowledge(OKAY),
    )
}

pub fn backup_recorded(on_proceed: Callback) -> DialogRequest {
    DialogRequest::with_cancel(
        BACKUP_TITLE,
        BACKUP_BODY,
        DialogAction::default_with(PROCEED, on_proceed),
        CANCEL,
    )
}
