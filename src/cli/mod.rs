pub mod config;
pub mod context;
pub mod dialogs;
pub mod entry;

pub use context::{CliContext, Presenter};
pub use entry::{Args, Command, ConfigCommand, DECLINED_EXIT_CODE, GlobalOptions, Outcome, run};
