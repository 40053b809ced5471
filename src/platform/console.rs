use dialoguer::Select;
use log::{debug, warn};
use tokio::sync::mpsc;
use tokio::task::{self, JoinHandle};

use super::DialogPresenter;
use crate::dialog::DialogRequest;
use crate::error::{Error, Result};

/// Interactive terminal presenter.
///
/// Requests go onto a queue drained by a single tokio worker, so `present`
/// returns immediately and dialogs are shown one at a time in arrival order.
/// Each dialog runs on the blocking pool because dialoguer reads the terminal
/// synchronously. The first prompt failure stops the worker; dialogs still
/// queued behind it are dropped and the failure is returned by
/// [`finish`](Self::finish).
pub struct ConsolePresenter {
    sender: mpsc::UnboundedSender<DialogRequest>,
    worker: JoinHandle<Result<()>>,
}

impl ConsolePresenter {
    /// Start the dialog worker. Must be called inside a tokio runtime.
    pub fn spawn() -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<DialogRequest>();
        let worker = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let title = request.title().to_string();
                let result = task::spawn_blocking(move || interact(request))
                    .await
                    .map_err(join_error)
                    .and_then(|answered| answered);
                if let Err(err) = result {
                    warn!("Dialog '{title}' failed: {err}");
                    return Err(err);
                }
            }
            Ok(())
        });

        Self { sender, worker }
    }

    /// Close the queue and wait until every pending dialog has been answered.
    ///
    /// Returns the prompt error that stopped the worker, if any.
    pub async fn finish(self) -> Result<()> {
        let Self { sender, worker } = self;
        drop(sender);
        worker.await.map_err(join_error)?
    }
}

impl DialogPresenter for ConsolePresenter {
    fn present(&self, request: DialogRequest) {
        if let Err(err) = self.sender.send(request) {
            warn!("Dialog worker is gone; dropping '{}'", err.0.title());
        }
    }
}

fn interact(request: DialogRequest) -> Result<()> {
    let labels: Vec<&str> = request.actions().iter().map(|action| action.label()).collect();
    let selection = Select::new()
        .with_prompt(format!("{}\n{}", request.title(), request.body()))
        .items(&labels)
        .default(request.safe_default_index())
        .interact_opt()
        .map_err(|err| Error::Prompt {
            message: err.to_string(),
        })?;

    match selection {
        Some(index) => {
            if let Some(action) = request.choose(index) {
                debug!("'{}' answered with '{}'", request.title(), action.label());
            }
        }
        None => debug!("'{}' dismissed", request.title()),
    }
    Ok(())
}

fn join_error(err: task::JoinError) -> Error {
    Error::PresenterJoin {
        message: err.to_string(),
    }
}
