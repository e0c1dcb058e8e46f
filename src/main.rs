//! calcpad: a keypad calculator for the terminal.

use anyhow::Result;
use calcpad::app::Session;
use calcpad::calculator::{FastevalEvaluator, evaluate_expression};
use calcpad::config::Config;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calcpad", version, about)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive keypad: each input line is a sequence of key presses
    Pad,
    /// Press a sequence of keys and print the final display
    Keys {
        #[arg(allow_hyphen_values = true)]
        sequence: String,
    },
    /// Evaluate a whole expression and print the result
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Pad) {
        Command::Pad => {
            let mut session = Session::new(&config);
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Command::Keys { sequence } => {
            let mut session = Session::new(&config);
            session.feed(&sequence);
            println!("{}", session.calculator().screen());
        }
        Command::Eval { expression } => {
            let outcome = evaluate_expression(&FastevalEvaluator, &expression, config.precision);
            println!("{}", outcome.display(&config.error_marker));
            if !outcome.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("calcpad=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calcpad=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
