use std::future::Future;
use std::io;

use tokio::io::{BufWriter, Stdout};
use tracing::info;

use super::error::AppError;

/// Buffered stdout handed to the application body
pub type StdoutWriter = BufWriter<Stdout>;

/// Reusable CLI application runner that handles:
/// - Argument parsing errors
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM, 129 = SIGHUP)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Program name used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse the process arguments, then run `main_fn` with a buffered stdout
    ///
    /// The body is raced against termination signals. `main_fn` is responsible
    /// for flushing the writer it is given.
    ///
    /// Never returns normally - it calls std::process::exit with the appropriate code
    pub async fn run<T, P, F, Fut>(self, parse_args: P, main_fn: F)
    where
        P: FnOnce(Vec<String>) -> Result<T, AppError>,
        F: FnOnce(StdoutWriter, T) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let args = match parse_args(std::env::args().collect()) {
            Ok(args) => args,
            Err(e) => self.exit_with(Err(e)),
        };

        let writer = BufWriter::new(tokio::io::stdout());

        tokio::select! {
            result = main_fn(writer, args) => self.exit_with(result),
            signal = wait_for_signal() => match signal {
                Ok(code) => std::process::exit(code),
                Err(e) => self.exit_with(Err(AppError::Io(e))),
            },
        }
    }

    fn exit_with(&self, result: Result<(), AppError>) -> ! {
        if let Err(e) = &result {
            eprintln!("{}: Error: {}", self.name, e);
        }
        std::process::exit(exit_code(&result))
    }
}

/// Exit status for a finished application body
pub fn exit_code(result: &Result<(), AppError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Wait for SIGINT, SIGTERM or SIGHUP and return the matching exit code
#[cfg(unix)]
async fn wait_for_signal() -> io::Result<i32> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sighup = signal(SignalKind::hangup())?;

    let code = tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM");
            143 // 128 + 15
        }
        _ = sigint.recv() => {
            info!("Received SIGINT");
            130 // 128 + 2
        }
        _ = sighup.recv() => {
            info!("Received SIGHUP");
            129 // 128 + 1
        }
    };

    Ok(code)
}

/// Wait for Ctrl+C and return the SIGINT exit code
#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<i32> {
    tokio::signal::ctrl_c().await?;
    info!("Received Ctrl+C");
    Ok(130)
}
