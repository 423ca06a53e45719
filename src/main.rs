use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use abacus::calculate;
use abacus::calculator::copy_to_clipboard;
use abacus::config::Config;
use abacus::items::CalculatorItem;
use abacus::keypad::Keypad;
use abacus::repl::{HELP, Repl};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// A four-function calculator with standard operator precedence.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Copy successful results to the clipboard.
    #[arg(long, global = true)]
    copy: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an expression, e.g. `abacus eval 2+3*4`.
    Eval {
        /// Expression; multiple arguments are joined with spaces.
        #[arg(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Press calculator buttons (0-9 . + - * / C =) and print the display.
    Keys {
        #[arg(allow_hyphen_values = true)]
        keys: String,
    },
    /// Read expressions line by line (the default).
    Repl,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("abacus: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let mut config = Config::load(args.config.as_deref())?;
    if args.copy {
        config.clipboard.copy_results = true;
    }

    match args.command.unwrap_or(Command::Repl) {
        Command::Eval { expression, json } => {
            let item = calculate(&expression.join(" "), &config);
            print_item(&item, json)?;
            finish(&item, &config)
        }
        Command::Keys { keys } => {
            let mut keypad = Keypad::new(config.display.clone());
            keypad.press_all(&keys);
            println!("{}", keypad.display());
            match keypad.last_result() {
                Some(item) => finish(item, &config),
                None => Ok(ExitCode::SUCCESS),
            }
        }
        Command::Repl => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                println!("{}\n", HELP);
            }
            Repl::new(config).run(stdin.lock(), io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_item(item: &CalculatorItem, json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, item)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", item.display_result)?;
    }
    Ok(())
}

/// Copy the result if configured and pick the exit status.
fn finish(item: &CalculatorItem, config: &Config) -> Result<ExitCode> {
    if item.is_error {
        return Ok(ExitCode::FAILURE);
    }
    if config.clipboard.copy_results {
        copy_to_clipboard(item.text_for_clipboard())?;
    }
    Ok(ExitCode::SUCCESS)
}
