use std::process::ExitCode;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nownext::cli::{self, Cli};
use nownext::{config, TaskError};

const USAGE_ERROR: u8 = 1;
const FATAL_ERROR: u8 = 2;

/// Initialize tracing on stderr so stdout carries only the status report.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "nownext=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_usage() {
    eprintln!("{}", Cli::command().render_help());
}

/// `help` and `--version` succeed; anything else is a usage error.
fn parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ErrorKind::InvalidSubcommand => {
            match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => eprintln!("unknown command: {name}\n"),
                _ => eprintln!("unknown command\n"),
            }
            print_usage();
            ExitCode::from(USAGE_ERROR)
        }
        _ => {
            let _ = err.print();
            ExitCode::from(USAGE_ERROR)
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_error(err),
    };

    init_tracing();

    let Some(command) = cli.command else {
        print_usage();
        return ExitCode::from(USAGE_ERROR);
    };

    let result = config::task_dir_from_env()
        .map_err(anyhow::Error::from)
        .and_then(|dir| cli::run(command, &dir, cli.style));

    match result {
        Ok(report) => {
            print!("{}", report.stdout);
            eprint!("{}", report.stderr);
            ExitCode::SUCCESS
        }
        Err(err) if err.downcast_ref::<TaskError>().is_some() => {
            eprintln!("error: {err:#}");
            ExitCode::from(USAGE_ERROR)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(FATAL_ERROR)
        }
    }
}
