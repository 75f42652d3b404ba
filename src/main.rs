//! AIMOS - command-line front end for the AI-Model Marketplace OS.

use std::process::ExitCode;

use aimos::cli::Cli;
use aimos::config::init_logging;
use aimos::AimosError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(Cli::parse_exit_code(&e));
        }
    };

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => return report(e),
    };

    if let Err(e) = init_logging(&settings.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

fn report(err: AimosError) -> ExitCode {
    tracing::debug!(error = %err, "Command failed");
    eprintln!("{}", err.user_message());
    ExitCode::from(err.exit_code())
}
