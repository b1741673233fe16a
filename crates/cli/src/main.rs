//! Cartstore CLI entry point

use std::{io, process::ExitCode};

use tracing::error;

use cartstore_cli::{cli, config::Config, observability};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            // Prints help/version to stdout, usage errors to stderr.
            _ = error.print();

            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(source) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{source}");
        }

        return ExitCode::FAILURE;
    }

    let mut out = io::stdout().lock();

    match cli::run(config, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(source) => {
            error!("{source}");

            ExitCode::FAILURE
        }
    }
}
