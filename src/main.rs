use clap::error::ErrorKind;
use clap::Parser;
use colored::*;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

use context7_api::api::Context7Client;
use context7_api::cli::Args;
use context7_api::config::Config;
use context7_api::dispatch::{execute, Command, DispatchOptions, EXIT_FAILURE};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprint!("{}", e);
                process::exit(EXIT_FAILURE);
            }
        },
    };
    init_tracing(args.verbose);

    let command = match Command::from_args(&args.command) {
        Ok(command) => command,
        Err(usage) => {
            eprintln!("{}", usage);
            process::exit(EXIT_FAILURE);
        }
    };

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(EXIT_FAILURE);
        }
    };

    let client = match Context7Client::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(EXIT_FAILURE);
        }
    };

    let options = DispatchOptions {
        strict: args.strict,
    };
    let code = match execute(
        &command,
        &client,
        options,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await
    {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            EXIT_FAILURE
        }
    };

    let code = match io::stdout().flush() {
        Ok(()) => code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            EXIT_FAILURE
        }
    };

    process::exit(code);
}
