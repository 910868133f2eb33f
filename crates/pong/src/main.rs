use std::process::ExitCode;

use pong_engine::logging::{init_logging, LoggingConfig};
use pong_engine::runtime::{Runtime, RuntimeConfig};
use pong_engine::StartupError;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let result = Runtime::run(RuntimeConfig::default()).map(|stats| {
        log::debug!("{stats:?}");
    });

    ExitCode::from(exit_status(result))
}

/// Process exit status for the outcome of a run. Failures are logged here.
fn exit_status(result: Result<(), StartupError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            log::error!("{}", snafu::Report::from_error(err));
            1
        }
    }
}
