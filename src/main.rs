//! cloudls - main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use cloudls::{build_provider, run_command, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting cloudls v{}", env!("CARGO_PKG_VERSION"));
    debug!("Command: {:?}, endpoint: {}", cli.command, cli.endpoint);

    let result = match build_provider(&cli) {
        Ok(provider) => run_command(&cli.command, &provider, cli.quiet).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
