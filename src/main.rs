use std::path::{Path, PathBuf};

use bank::prelude::*;
use tokio::io::AsyncWrite;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: bank [--abort-on-error] <script.csv>";

#[tokio::main]
async fn main() {
    init_tracing();

    CliApp::new("bank").run(parse_args, run_script).await
}

/// Log to stderr so stdout carries only statements; RUST_LOG overrides the level
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

#[derive(Debug, PartialEq)]
struct ReplayArgs {
    script: PathBuf,
    abort_on_error: bool,
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<ReplayArgs, AppError> {
    match args.as_slice() {
        [_, flag, script] if flag == "--abort-on-error" => Ok(ReplayArgs {
            script: PathBuf::from(script),
            abort_on_error: true,
        }),
        [_, script] => Ok(ReplayArgs {
            script: PathBuf::from(script),
            abort_on_error: false,
        }),
        _ => Err(AppError::InvalidArguments(USAGE.to_string())),
    }
}

async fn run_script(stdout: StdoutWriter, args: ReplayArgs) -> Result<(), AppError> {
    if args.abort_on_error {
        replay_script(&args.script, AbortOnError, stdout).await
    } else {
        replay_script(&args.script, SkipErrors, stdout).await
    }
}

/// Replay the script and write one statement per account
async fn replay_script<P, W>(script: &Path, policy: P, mut writer: W) -> Result<(), AppError>
where
    P: ErrorPolicy,
    W: AsyncWrite + Unpin,
{
    if !script.is_file() {
        return Err(AppError::FileNotFound(script.display().to_string()));
    }

    let operations = CsvOperationStream::<f64>::from_file(script).await?;

    let mut session = ReplaySession::new(ScriptProcessor::new(), policy);
    if !session.process_stream(operations).await {
        return Err(AppError::Aborted);
    }

    write_statements(session.processor().accounts(), &mut writer).await?;

    Ok(())
}
