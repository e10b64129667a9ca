//! SimpleStorage Deployer
//!
//! Deploys a SimpleStorage contract, stores a value, and reads it back.

use std::process::ExitCode;

use simple_storage_deployer::{logging, runner, Config, SimpleStorageRunner};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging, falling back to the default level if the config is unusable
    let level = config.as_ref().map(|c| c.log_level.as_str()).unwrap_or(logging::DEFAULT_LOG_LEVEL);
    logging::init(level);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting SimpleStorage deployer");

    let output_format = config.output_format;
    let result = async {
        let report = SimpleStorageRunner::new(config)?.run().await?;
        runner::render(&report, output_format)
    }
    .await;

    match result {
        Ok(output) => {
            println!("{output}");
            tracing::info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            ExitCode::FAILURE
        }
    }
}
