//! Raw command line → [`Event`] normalization.
//!
//! Parsing is pure: the caller supplies the timestamp and gets back a value,
//! nothing is read or written. Tokens are split on whitespace only; quoting is
//! not interpreted, so `git commit -m "fix it"` yields the tokens `"fix` and
//! `it"`.

use crate::event::{Event, Timestamp};

/// Programs whose first non-flag argument is recorded as the subcommand.
const SUBCOMMAND_PROGRAMS: &[&str] = &["git", "npm", "yarn", "pnpm", "pip", "pip3"];

/// Programs whose `-`-prefixed arguments are recorded as flags.
const FLAG_PROGRAMS: &[&str] = &["git", "rm", "xcode-select"];

/// Longest suffix (in characters) still treated as a file extension.
const MAX_EXTENSION_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The command line was empty or contained only whitespace.
    EmptyCommand,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCommand => write!(f, "invalid input: command line is empty"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Normalize `raw` into an [`Event`] observed at `observed_at`.
///
/// # Errors
///
/// Returns [`ParseError::EmptyCommand`] if `raw` has no tokens.
pub fn parse(raw: &str, observed_at: Timestamp) -> Result<Event, ParseError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let Some((&command, args)) = tokens.split_first() else {
        return Err(ParseError::EmptyCommand);
    };

    let subcommand = if SUBCOMMAND_PROGRAMS.contains(&command) {
        args.iter()
            .find(|t| !is_flag(t))
            .map(|t| (*t).to_string())
    } else {
        None
    };

    let flags = if FLAG_PROGRAMS.contains(&command) {
        args.iter()
            .filter(|t| is_flag(t))
            .map(|t| (*t).to_string())
            .collect()
    } else {
        Vec::new()
    };

    let file_extensions = tokens
        .iter()
        .filter_map(|t| extension_of(t))
        .map(str::to_owned)
        .collect();

    Ok(Event {
        command: command.to_string(),
        timestamp: observed_at,
        subcommand,
        flags,
        file_extensions,
        legacy_force: raw.contains("--force"),
        legacy_rm_rf: raw.contains("-rf") || raw.contains("-fr"),
    })
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Suffix after the last `.` when the token looks like `name.ext`.
///
/// The dot must have something before it (so `.DS_Store` and `.go` are
/// rejected) and 1 to 3 characters after it (so `hello.` is rejected).
fn extension_of(token: &str) -> Option<&str> {
    let dot = token.rfind('.')?;
    if dot == 0 {
        return None;
    }
    let ext = &token[dot + 1..];
    let len = ext.chars().count();
    (1..=MAX_EXTENSION_LEN).contains(&len).then_some(ext)
}
