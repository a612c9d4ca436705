use std::error::Error as _;

use clap::Parser;
use tracing::debug;

use flint::{EXIT_CONFIG_ERROR, FlintError};
use flint::cli::Cli;
use flint::commands::run_lint;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let exit_code = match run_lint(&cli, &mut stdout.lock()) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

/// `Error: <message> [<kind>]`, then one `caused by:` line per source.
fn print_error(error: &FlintError) {
    eprintln!("Error: {error} [{}]", error.error_type());
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {level}");
}
