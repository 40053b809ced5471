use std::io::{self, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::alerts::Alerts;
use crate::error::{Error, Result};

use super::context::CliContext;
use super::entry::{Command, CopySecretArgs, Outcome};

/// Present the dialog for `ctx.command()` and report what the user chose.
pub async fn execute(ctx: &CliContext) -> Result<Outcome> {
    // Secret is resolved before any dialog is shown.
    let secret = match ctx.command() {
        Command::CopySecret(args) => Some(resolve_secret(args)?),
        _ => None,
    };

    let alerts = Alerts::new(ctx.presenter(), ctx.clipboard());
    let confirmed = Arc::new(AtomicBool::new(false));
    let mark_confirmed = {
        let confirmed = Arc::clone(&confirmed);
        move || confirmed.store(true, Ordering::SeqCst)
    };

    let awaits_choice = match ctx.command() {
        Command::Error(args) => {
            // clap requires MESSAGE or --preset; the preset wins when both are given.
            match args.preset {
                Some(preset) => alerts.notify_preset(preset),
                None => alerts.notify_error(
                    args.message.as_deref().unwrap_or_default(),
                    &args.dismiss_label,
                ),
            }
            false
        }
        Command::Confirm(args) => {
            alerts.confirm_destructive(
                &args.title,
                &args.body,
                &args.confirm_label,
                mark_confirmed,
            );
            true
        }
        Command::DeleteAccount(args) => {
            if args.legacy {
                alerts.confirm_delete_legacy_account(&args.name, mark_confirmed);
            } else {
                alerts.confirm_delete_account(&args.name, mark_confirmed);
            }
            true
        }
        Command::DeleteIdentity => {
            alerts.confirm_delete_identity(mark_confirmed);
            true
        }
        Command::CopySecret(_) => {
            alerts.confirm_copy_secret_then(secret.unwrap_or_default(), mark_confirmed);
            true
        }
        Command::Risk(args) => {
            alerts.confirm_risk(&args.message, mark_confirmed);
            true
        }
        Command::Multipart => {
            alerts.confirm_multipart_unsupported(mark_confirmed);
            true
        }
        Command::DecodeFailure => {
            alerts.notify_decode_failure();
            false
        }
        Command::BackupDone => {
            alerts.confirm_backup_recorded(mark_confirmed);
            true
        }
        Command::Config(_) => {
            return Err(Error::InvalidArgument {
                message: "config commands do not present dialogs".to_string(),
            });
        }
    };

    alerts.into_presenter().finish().await?;

    let outcome = if !awaits_choice {
        Outcome::Shown
    } else if confirmed.load(Ordering::SeqCst) {
        Outcome::Confirmed
    } else {
        Outcome::Declined
    };
    debug!("Dialog finished: {outcome:?}");
    Ok(outcome)
}

fn resolve_secret(args: &CopySecretArgs) -> Result<String> {
    if let Some(secret) = args.secret.as_ref()
        && !secret.is_empty()
    {
        return Ok(secret.clone());
    }

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    let secret = raw.trim_end_matches(['\r', '\n']).to_string();
    if secret.is_empty() {
        return Err(Error::InvalidArgument {
            message: "copy-secret needs --secret, SIGNER_ALERTS_SECRET or a phrase on stdin"
                .to_string(),
        });
    }
    Ok(secret)
}
