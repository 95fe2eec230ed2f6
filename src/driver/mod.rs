//! Entry-point driver for completer programs.
//!
//! The shell invokes a completer binary with the completion request encoded
//! in environment variables. The driver decides between two modes:
//!
//! - **Announce mode**: the sentinel variable is present. Print the root
//!   command's name, unrendered, and exit. Used by the discovery
//!   collaborator to enumerate installed commands.
//! - **Complete mode**: read the shell kind and raw command line, strip the
//!   `"<name> "` prefix, walk the tree, render, print.
//!
//! The environment is read in one place ([`Invocation::from_env`]) and
//! threaded into [`respond`] as explicit parameters, so matching and
//! rendering stay pure and testable without touching process state.

use std::env;
use std::io::{self, Write};

use crate::error::{ProtocolError, Result};
use crate::shell::ShellKind;
use crate::tree::Command;

/// Sentinel variable; its presence selects announce mode.
pub const NAME_ENV: &str = "_completer_name";

/// Shell kind identifier for complete mode.
pub const SHELL_ENV: &str = "_completer_shell";

/// Raw text of the command line being completed.
pub const ARGS_ENV: &str = "_completer_args";

/// Snapshot of the environment state relevant to one completion request.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Announce mode requested.
    pub announce: bool,

    /// Value of the shell-kind variable, if set.
    pub shell: Option<String>,

    /// Value of the raw-command-line variable, if set.
    pub raw_line: Option<String>,
}

impl Invocation {
    /// Read the completion request from the process environment.
    pub fn from_env() -> Self {
        Invocation {
            announce: env::var_os(NAME_ENV).is_some(),
            shell: env::var(SHELL_ENV).ok(),
            raw_line: env::var(ARGS_ENV).ok(),
        }
    }
}

/// Answer a completion request.
///
/// Pure function: the returned string is exactly what the completer prints,
/// with no trailing newline added.
///
/// # Errors
/// * Configuration error when the shell kind is unsupported
/// * Protocol error when a required variable is missing or the raw line
///   does not start with `"<name> "` (stale registration)
pub fn respond(command: &Command, invocation: &Invocation) -> Result<String> {
    if invocation.announce {
        return Ok(command.name().to_owned());
    }

    let shell = invocation
        .shell
        .as_deref()
        .ok_or(ProtocolError::MissingVariable(SHELL_ENV))?;
    let shell: ShellKind = shell.parse()?;

    let raw_line = invocation
        .raw_line
        .as_deref()
        .ok_or(ProtocolError::MissingVariable(ARGS_ENV))?;

    let prefix = format!("{} ", command.name());
    let rest = raw_line
        .strip_prefix(&prefix)
        .ok_or_else(|| ProtocolError::PrefixMismatch {
            command: command.name().to_owned(),
            line: raw_line.to_owned(),
        })?;

    let hints = command.complete_line(rest);
    Ok(shell.render_hints(&hints))
}

/// Read the environment, answer the request, and print the result.
///
/// Thin I/O shim around [`respond`]; a completer binary's `main` ends here.
pub fn run(command: &Command) -> Result<()> {
    let output = respond(command, &Invocation::from_env())?;

    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
