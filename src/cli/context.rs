use std::io::Stdout;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{PresenterKind, Settings, default_config_path, load_settings};
use crate::dialog::DialogRequest;
use crate::error::Result;
use crate::platform::{
    ClipboardWriter, ConsolePresenter, DialogPresenter, HeadlessAnswer, HeadlessPresenter,
    JsonPresenter,
};

use super::entry::{Args, Command, GlobalOptions};

/// How long `copy-secret` keeps serving the phrase on Linux before exiting.
const CLIPBOARD_HOLD: Duration = Duration::from_secs(30);

pub struct CliContext {
    command: Command,
    settings: Settings,
    config_path: PathBuf,
}

impl CliContext {
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = args
            .global
            .config_file
            .clone()
            .unwrap_or_else(default_config_path);
        let mut settings = load_settings(Some(config_path.clone()))?;
        Self::apply_flags(&mut settings, &args.global);

        Ok(Self {
            command: args.command,
            settings,
            config_path,
        })
    }

    // Flags win over the config file and the environment.
    fn apply_flags(settings: &mut Settings, options: &GlobalOptions) {
        if let Some(presenter) = options.presenter {
            settings.presenter = presenter;
        }
        if let Some(answer) = options.answer {
            settings.answer = answer;
        }
        if options.non_interactive {
            settings.presenter = PresenterKind::Headless;
        }
        if options.json {
            settings.presenter = PresenterKind::Json;
        }
        if options.assume_yes {
            settings.answer = HeadlessAnswer::Accept;
        }
        if let Some(clipboard) = options.clipboard {
            settings.clipboard = clipboard;
        }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn presenter(&self) -> Presenter {
        Presenter::from_settings(&self.settings)
    }

    pub fn clipboard(&self) -> Arc<dyn ClipboardWriter> {
        self.settings.clipboard.writer_holding(CLIPBOARD_HOLD)
    }
}

/// Presenter chosen from [`Settings`].
pub enum Presenter {
    Console(ConsolePresenter),
    Headless(HeadlessPresenter<Stdout>),
    Json(JsonPresenter<Stdout>),
}

impl Presenter {
    /// Build the configured presenter. The console variant needs a tokio runtime.
    pub fn from_settings(settings: &Settings) -> Self {
        match settings.presenter {
            PresenterKind::Console => Presenter::Console(ConsolePresenter::spawn()),
            PresenterKind::Headless => {
                Presenter::Headless(HeadlessPresenter::stdout(settings.answer))
            }
            PresenterKind::Json => Presenter::Json(JsonPresenter::stdout()),
        }
    }

    /// Wait until every presented dialog has been answered.
    pub async fn finish(self) -> Result<()> {
        match self {
            Presenter::Console(console) => console.finish().await,
            Presenter::Headless(_) | Presenter::Json(_) => Ok(()),
        }
    }
}

impl DialogPresenter for Presenter {
    fn present(&self, request: DialogRequest) {
        match self {
            Presenter::Console(console) => console.present(request),
            Presenter::Headless(headless) => headless.present(request),
            Presenter::Json(json) => json.present(request),
        }
    }
}
