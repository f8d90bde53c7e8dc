//! gtinctl - Main entry point

use clap::Parser;
use log::{debug, error, info};
use std::process::ExitCode;

use gtinctl::{run_fetch_command, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting gtinctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: product_type={}, jsonld={}, page={:?}, page_range={:?}, output={}, api_url={}, batch={}",
        cli.product_type,
        cli.jsonld,
        cli.page,
        cli.page_range,
        cli.output.display(),
        cli.api_url,
        cli.batch
    );

    match run_fetch_command(&cli).await {
        Ok(summary) => {
            if summary.is_aborted() {
                info!("Completed with errors");
            } else {
                info!("Completed successfully");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
