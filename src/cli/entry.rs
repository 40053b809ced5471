use clap::{ArgGroup, Args as ClapArgs, Parser, Subcommand};

use crate::alerts::ErrorPreset;
use crate::config::PresenterKind;
use crate::error::Result;
use crate::platform::{ClipboardKind, HeadlessAnswer};

use super::{config, context::CliContext, dialogs};

/// Exit status for a confirmation dialog that was declined or dismissed.
pub const DECLINED_EXIT_CODE: i32 = 3;

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Confirmation and warning dialogs for signer workflows",
    after_help = "Exit status: 0 confirmed or informational, 3 declined, 1 error."
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Answer dialogs automatically and print a transcript instead of prompting
    #[arg(long, global = true)]
    pub non_interactive: bool,
    /// With --non-interactive, accept every dialog instead of declining
    #[arg(short = 'y', long = "assume-yes", global = true)]
    pub assume_yes: bool,
    /// Print dialogs as JSON without answering them
    #[arg(long, global = true, conflicts_with = "non_interactive")]
    pub json: bool,
    /// Dialog backend; --non-interactive and --json are shorthands
    #[arg(
        long,
        value_enum,
        value_name = "KIND",
        global = true,
        conflicts_with_all = ["non_interactive", "json"]
    )]
    pub presenter: Option<PresenterKind>,
    /// Choice made by the non-interactive presenter
    #[arg(
        long,
        value_enum,
        value_name = "ANSWER",
        global = true,
        conflicts_with = "assume_yes"
    )]
    pub answer: Option<HeadlessAnswer>,
    /// Clipboard backend used by `copy-secret`
    #[arg(long, value_enum, value_name = "BACKEND", global = true)]
    pub clipboard: Option<ClipboardKind>,
    /// Override the config file path
    #[arg(long = "config-file", value_name = "PATH", global = true)]
    pub config_file: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show an error notification
    Error(ErrorArgs),
    /// Ask for confirmation of a destructive action
    Confirm(ConfirmArgs),
    /// Confirm deletion of an account
    DeleteAccount(DeleteAccountArgs),
    /// Confirm deletion of the identity and all of its accounts
    DeleteIdentity,
    /// Warn before copying a recovery phrase to the clipboard
    CopySecret(CopySecretArgs),
    /// Ask the user to acknowledge a risk
    Risk(RiskArgs),
    /// Warn that a transaction payload is too big to be decoded
    Multipart,
    /// Warn that a message could not be decoded with the available metadata
    DecodeFailure,
    /// Ask the user to confirm the recovery phrase was backed up
    BackupDone,
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the effective settings and where they were loaded from
    Show,
}

#[derive(ClapArgs, Debug, Clone)]
#[command(group = ArgGroup::new("error_source").required(true).args(["message", "preset"]))]
pub struct ErrorArgs {
    /// Error message shown in the dialog body
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,
    /// Use a canned error message
    #[arg(long, value_enum)]
    pub preset: Option<ErrorPreset>,
    /// Label of the dismiss button (ignored with --preset)
    #[arg(long = "dismiss-label", default_value = "Try again")]
    pub dismiss_label: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ConfirmArgs {
    /// Dialog title
    pub title: String,
    /// Dialog body
    pub body: String,
    /// Label of the destructive button
    #[arg(long = "confirm-label", default_value = "Delete")]
    pub confirm_label: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct DeleteAccountArgs {
    /// Account name shown in the dialog
    #[arg(value_name = "NAME")]
    pub name: String,
    /// Account derived without an identity; mention the recovery phrase
    #[arg(long)]
    pub legacy: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CopySecretArgs {
    /// Recovery phrase to copy (read from stdin when omitted)
    #[arg(long, env = "SIGNER_ALERTS_SECRET", hide_env_values = true)]
    pub secret: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RiskArgs {
    /// Risk description shown in the dialog body
    pub message: String,
}

/// What the user did with the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The confirming action was chosen
    Confirmed,
    /// Cancelled or dismissed
    Declined,
    /// Informational dialog or nothing to confirm
    Shown,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Confirmed | Outcome::Shown => 0,
            Outcome::Declined => DECLINED_EXIT_CODE,
        }
    }
}

pub async fn run(args: Args) -> Result<Outcome> {
    let ctx = CliContext::from_args(args)?;
    match ctx.command() {
        Command::Config(cmd) => {
            config::execute(cmd, &ctx)?;
            Ok(Outcome::Shown)
        }
        _ => dialogs::execute(&ctx).await,
    }
}
