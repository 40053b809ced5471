use crate::error::Result;

use super::context::CliContext;
use super::entry::ConfigCommand;

pub fn execute(command: &ConfigCommand, ctx: &CliContext) -> Result<()> {
    match command {
        ConfigCommand::Show => show(ctx),
    }
}

fn show(ctx: &CliContext) -> Result<()> {
    let path = ctx.config_path();
    let source = if path.is_file() { "loaded" } else { "not found" };
    println!("# config file: {} ({source})", path.display());
    print!("{}", ctx.settings().to_toml()?);
    Ok(())
}
