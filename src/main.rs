use clap::Parser;

use signer_alerts::cli::{Args, run};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    match run(args).await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
