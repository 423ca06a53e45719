//! Line-oriented calculator prompt.
//!
//! Each line is either a `:` command or an expression to evaluate.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::warn;

use crate::calculate;
use crate::calculator::copy_to_clipboard;
use crate::config::Config;
use crate::items::CalculatorItem;

pub const HELP: &str = "\
Type an expression such as 2+3*4 and press Enter.
Operators: + - * /   (* and / bind tighter than + and -)
Commands:
  :c, :copy   copy the last result to the clipboard
  :h, :help   show this help
  :q, :quit   exit";

/// Commands that can be parsed from a prompt line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Quit,
    Help,
    /// Copy the last result to the clipboard.
    Copy,
    /// Evaluate the line as an expression.
    Evaluate(String),
    /// Blank line.
    Empty,
    /// Unknown `:` command.
    Unknown(String),
}

/// Parse one prompt line into a command.
///
/// Supports:
/// - `:q` or `:quit` → Quit
/// - `:h` or `:help` → Help
/// - `:c` or `:copy` → Copy
/// - anything else → Evaluate
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Empty;
    }

    match input.strip_prefix(':') {
        Some("q" | "quit") => ReplCommand::Quit,
        Some("h" | "help") => ReplCommand::Help,
        Some("c" | "copy") => ReplCommand::Copy,
        Some(_) => ReplCommand::Unknown(input.to_string()),
        None => ReplCommand::Evaluate(input.to_string()),
    }
}

/// Whether the prompt should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl {
    config: Config,
    last_result: Option<CalculatorItem>,
}

impl Repl {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            last_result: None,
        }
    }

    pub fn last_result(&self) -> Option<&CalculatorItem> {
        self.last_result.as_ref()
    }

    /// Read lines from `input` until EOF or `:q`, writing responses to `output`.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if self.handle_line(&line, &mut output)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Handle one line, writing any response to `output`.
    pub fn handle_line(&mut self, line: &str, output: &mut impl Write) -> Result<Flow> {
        match parse_repl_input(line) {
            ReplCommand::Quit => return Ok(Flow::Quit),
            ReplCommand::Help => writeln!(output, "{}", HELP)?,
            ReplCommand::Empty => {}
            ReplCommand::Unknown(command) => {
                writeln!(output, "Unknown command: {} (try :help)", command)?
            }
            ReplCommand::Copy => match &self.last_result {
                Some(item) => match copy_to_clipboard(item.text_for_clipboard()) {
                    Ok(()) => writeln!(output, "Copied {}", item.text_for_clipboard())?,
                    Err(err) => {
                        warn!("{:#}", err);
                        writeln!(output, "Copy failed: {:#}", err)?;
                    }
                },
                None => writeln!(output, "Nothing to copy")?,
            },
            ReplCommand::Evaluate(expression) => {
                let item = calculate(&expression, &self.config);
                writeln!(output, "= {}", item.display_result)?;

                if self.config.clipboard.copy_results && !item.is_error {
                    if let Err(err) = copy_to_clipboard(item.text_for_clipboard()) {
                        warn!("{:#}", err);
                    }
                }
                self.last_result = Some(item);
            }
        }
        Ok(Flow::Continue)
    }
}
