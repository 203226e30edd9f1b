//! Command line parsing.
//!
//! A line is either a bare keyword or `<keyword> <argument>`, where the
//! argument is everything after the first space. Argument-taking commands
//! need exactly two whitespace-separated words, and any two-word line with an
//! unsafe argument is rejected before its keyword is even looked at.

use crate::error::{JotterError, Result};
use crate::model::LoadMode;
use crate::validation::is_valid_name;

const ARG_KEYWORDS: &[&str] = &["del", "new", "app", "ow"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Exit,
    Help,
    Clear,
    List,
    Delete(String),
    New(String),
    Open(String, LoadMode),
}

/// Parses one input line.
///
/// The missing-argument error is reserved for a bare argument keyword
/// (`new`, `new `). Longer lines that merely start with one, like `newfoo`,
/// `owl` or `new my note`, are unknown commands rather than prefix matches.
pub fn parse(line: &str) -> Result<ShellCommand> {
    match line {
        "exit" => return Ok(ShellCommand::Exit),
        "help" => return Ok(ShellCommand::Help),
        "cls" => return Ok(ShellCommand::Clear),
        "list" => return Ok(ShellCommand::List),
        _ => {}
    }

    let words = line.split_whitespace().count();
    let arg = extract_arg(line);

    if words == 2 && !is_valid_name(arg) {
        return Err(JotterError::InvalidName(arg.to_string()));
    }

    if words == 2 {
        if line.starts_with("del ") {
            return Ok(ShellCommand::Delete(arg.to_string()));
        }
        if line.starts_with("new ") {
            return Ok(ShellCommand::New(arg.to_string()));
        }
        if line.starts_with("app ") {
            return Ok(ShellCommand::Open(arg.to_string(), LoadMode::Append));
        }
        if line.starts_with("ow ") {
            return Ok(ShellCommand::Open(arg.to_string(), LoadMode::Overwrite));
        }
    }

    if words == 1 && ARG_KEYWORDS.iter().any(|k| *k == line.trim()) {
        return Err(JotterError::MissingArgument);
    }

    Err(JotterError::UnknownCommand(line.to_string()))
}

/// Everything after the first space, or "" if there is none.
fn extract_arg(line: &str) -> &str {
    line.split_once(' ').map(|(_, arg)| arg).unwrap_or("")
}
